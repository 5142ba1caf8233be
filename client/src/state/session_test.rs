use super::*;

#[test]
fn default_session_is_unrestored_and_anonymous() {
    let state = SessionState::default();
    assert!(!state.restored);
    assert!(!state.logged_in);
    assert_eq!(state.identity, None);
}

#[test]
fn signed_in_carries_identity() {
    let state = SessionState::signed_in(Some("ana@example.com".to_owned()));
    assert!(state.restored);
    assert!(state.logged_in);
    assert_eq!(state.display_name(), Some("ana@example.com"));
}

#[test]
fn display_name_hidden_when_signed_out_or_blank() {
    assert_eq!(SessionState::signed_out().display_name(), None);
    assert_eq!(SessionState::signed_in(Some("  ".to_owned())).display_name(), None);
    let stale = SessionState { restored: true, logged_in: false, identity: Some("old".to_owned()) };
    assert_eq!(stale.display_name(), None);
}

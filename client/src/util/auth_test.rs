#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn restore_without_browser_storage_is_signed_out() {
    assert_eq!(restore_session(), SessionState::signed_out());
}

#[test]
fn establish_and_end_update_the_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        let chat = RwSignal::new(ChatState::default());
        establish_session(session, "ana@example.com");
        assert_eq!(session.get_untracked(), SessionState::signed_in(Some("ana@example.com".to_owned())));
        end_session(session, chat);
        assert_eq!(session.get_untracked(), SessionState::signed_out());
    });
}

#[test]
fn sign_out_clears_transcript_before_next_user() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        let chat = RwSignal::new(ChatState::default());
        establish_session(session, "alice");
        chat.update(|c| c.push_user("my salary is 9000"));
        end_session(session, chat);
        establish_session(session, "bob");
        let transcript = chat.get_untracked();
        assert!(transcript.messages.is_empty());
        assert!(!transcript.pending);
    });
}

#[test]
fn identity_prefers_backend_name() {
    let body = serde_json::json!({ "name": "Ana", "email": "ana@example.com" });
    assert_eq!(identity_from(&body, "ana@example.com"), "Ana");
    let body = serde_json::json!({ "username": "ana_b" });
    assert_eq!(identity_from(&body, "fallback"), "ana_b");
}

#[test]
fn identity_falls_back_when_missing_or_blank() {
    assert_eq!(identity_from(&serde_json::json!({ "name": "  " }), "ana@example.com"), "ana@example.com");
    assert_eq!(identity_from(&serde_json::json!("ok"), "ana@example.com"), "ana@example.com");
}

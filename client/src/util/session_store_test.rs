use super::*;

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::default())
}

// =============================================================
// is_logged_in fails closed
// =============================================================

#[test]
fn absent_flag_is_logged_out() {
    assert!(!store().is_logged_in());
}

#[test]
fn only_exact_true_is_logged_in() {
    let store = store();
    for value in ["", "false", "TRUE", "True", " true", "true ", "1", "yes", "null", "undefined", "\"true\""] {
        store.storage().set(SESSION_FLAG_KEY, value);
        assert!(!store.is_logged_in(), "{value:?} must not count as logged in");
    }
    store.storage().set(SESSION_FLAG_KEY, "true");
    assert!(store.is_logged_in());
}

// =============================================================
// set_session / clear_session
// =============================================================

#[test]
fn set_session_persists_flag_and_identity() {
    let store = store();
    store.set_session(true, Some("ana@example.com"));
    assert_eq!(store.storage().get(SESSION_FLAG_KEY).as_deref(), Some("true"));
    assert_eq!(store.identity().as_deref(), Some("ana@example.com"));
    assert!(store.is_logged_in());
}

#[test]
fn set_session_false_removes_flag_instead_of_storing_false() {
    let store = store();
    store.set_session(true, Some("ana@example.com"));
    store.set_session(false, None);
    assert_eq!(store.storage().get(SESSION_FLAG_KEY), None);
    assert_eq!(store.identity(), None);
    assert!(!store.is_logged_in());
}

#[test]
fn clear_session_removes_both_keys() {
    let store = store();
    store.set_session(true, Some("ana@example.com"));
    store.clear_session();
    assert_eq!(store.storage().get(SESSION_FLAG_KEY), None);
    assert_eq!(store.storage().get(IDENTITY_KEY), None);
}

#[test]
fn empty_identity_reads_as_none() {
    let store = store();
    store.set_session(true, Some(""));
    assert_eq!(store.identity(), None);
}

// =============================================================
// snapshot
// =============================================================

#[test]
fn snapshot_reflects_store() {
    let store = store();
    assert_eq!(store.snapshot(), SessionState::signed_out());
    store.set_session(true, Some("ana@example.com"));
    assert_eq!(store.snapshot(), SessionState::signed_in(Some("ana@example.com".to_owned())));
}

#[test]
fn snapshot_ignores_identity_without_flag() {
    let store = store();
    store.storage().set(IDENTITY_KEY, "ghost");
    assert_eq!(store.snapshot(), SessionState::signed_out());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_outside_hydrate() {
    let store = browser();
    store.set_session(true, Some("ana@example.com"));
    assert!(!store.is_logged_in());
}

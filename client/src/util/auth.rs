//! Sign-in and sign-out transitions for the session hint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these after the backend accepts or ends a session so the
//! persisted flag and the context signal never drift apart.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::util::session_store;

/// Read the persisted flag into a restored session snapshot.
pub fn restore_session() -> SessionState {
    session_store::browser().snapshot()
}

/// Record a successful login/signup for `identity`.
pub fn establish_session(session: RwSignal<SessionState>, identity: &str) {
    session_store::browser().set_session(true, Some(identity));
    session.set(SessionState::signed_in(Some(identity.to_owned())));
}

/// Name to remember for a session: the backend's `name`/`username` field
/// when present, else `fallback`.
pub fn identity_from(body: &serde_json::Value, fallback: &str) -> String {
    ["name", "username"]
        .iter()
        .find_map(|key| body.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

/// Forget the local session and the chat transcript that belonged to it.
/// The caller handles the backend sign-out call.
pub fn end_session(session: RwSignal<SessionState>, chat: RwSignal<ChatState>) {
    session_store::browser().clear_session();
    session.set(SessionState::signed_out());
    chat.set(ChatState::default());
}

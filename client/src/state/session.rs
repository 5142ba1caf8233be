//! Client session hint shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the nav bar read this signal; sign-in/sign-out helpers in
//! `util::auth` write it together with the persisted flag. It is a local hint
//! only; the backend authorizes every call on its own.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Snapshot of the persisted session flag and identity hint.
///
/// `restored` stays false until the browser store has been read, so server
/// rendering and the first hydrated frame agree on a neutral state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub restored: bool,
    pub logged_in: bool,
    pub identity: Option<String>,
}

impl SessionState {
    /// A restored session for `identity`.
    pub fn signed_in(identity: Option<String>) -> Self {
        Self { restored: true, logged_in: true, identity }
    }

    /// A restored, anonymous session.
    pub fn signed_out() -> Self {
        Self { restored: true, logged_in: false, identity: None }
    }

    /// Name to show in the nav bar, if any.
    pub fn display_name(&self) -> Option<&str> {
        if !self.logged_in {
            return None;
        }
        self.identity.as_deref().filter(|name| !name.trim().is_empty())
    }
}

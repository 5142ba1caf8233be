//! Route guards evaluated before a view is constructed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The routing layer asks [`RouteGuard::evaluate`] whether to build a view or
//! redirect. Guards are pure; the navigation side effect lives in
//! [`install_guard_redirect`] so it stays identical across routes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::session::SessionState;

/// Which session state a route accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGuard {
    /// Signed-out visitors are sent to the login route.
    RequireAuthenticated,
    /// Signed-in visitors are sent on to the home route.
    RequireAnonymous,
}

/// Result of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectTo(AppRoute),
}

impl RouteGuard {
    /// Decide from the session flag alone.
    pub fn evaluate(self, logged_in: bool) -> GuardOutcome {
        match (self, logged_in) {
            (RouteGuard::RequireAuthenticated, false) => GuardOutcome::RedirectTo(AppRoute::Login),
            (RouteGuard::RequireAnonymous, true) => GuardOutcome::RedirectTo(AppRoute::Home),
            (RouteGuard::RequireAuthenticated, true) | (RouteGuard::RequireAnonymous, false) => {
                GuardOutcome::Allow
            }
        }
    }

    /// Decide from a session snapshot; `None` until the store has been read.
    pub fn evaluate_session(self, session: &SessionState) -> Option<GuardOutcome> {
        session.restored.then(|| self.evaluate(session.logged_in))
    }
}

/// Navigate away whenever `guard` rejects the current session.
///
/// Re-runs on every session change, so signing out on a protected page
/// bounces to login without a reload.
pub fn install_guard_redirect<F>(guard: RouteGuard, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(GuardOutcome::RedirectTo(route)) = guard.evaluate_session(&session.get()) {
            navigate(&route.href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

//! Closed route table and navigation-state classification.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every client route lives under [`BASE_PATH`]. The nav bar derives its mode
//! from the current path through [`classify`], and the routing layer picks a
//! guard per route through [`AppRoute::guard`]. Neither reads the session.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::util::guard::RouteGuard;

/// Prefix every client route is mounted under.
pub const BASE_PATH: &str = "/BudgetAI";
/// [`BASE_PATH`] as a router segment.
pub const BASE_SEGMENT: &str = "BudgetAI";

/// Every screen the client can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Intro,
    Signup,
    Login,
    Home,
    Upload,
    Analysis,
    Chat,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Intro,
        AppRoute::Signup,
        AppRoute::Login,
        AppRoute::Home,
        AppRoute::Upload,
        AppRoute::Analysis,
        AppRoute::Chat,
    ];

    /// Route path relative to [`BASE_PATH`].
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Intro => "/",
            AppRoute::Signup => "/signup",
            AppRoute::Login => "/login",
            AppRoute::Home => "/home",
            AppRoute::Upload => "/upload",
            AppRoute::Analysis => "/analysis",
            AppRoute::Chat => "/chat",
        }
    }

    /// Single path segment used by the router; empty for the intro route.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Absolute in-app href, including [`BASE_PATH`].
    pub fn href(self) -> String {
        match self {
            AppRoute::Intro => BASE_PATH.to_owned(),
            other => format!("{BASE_PATH}{}", other.path()),
        }
    }

    /// Label shown in navigation links.
    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Intro => "BudgetAI",
            AppRoute::Signup => "Sign Up",
            AppRoute::Login => "Log In",
            AppRoute::Home => "Home",
            AppRoute::Upload => "Upload",
            AppRoute::Analysis => "Analysis",
            AppRoute::Chat => "Chat",
        }
    }

    /// Guard the routing layer evaluates before constructing the view.
    pub fn guard(self) -> RouteGuard {
        match self {
            AppRoute::Intro | AppRoute::Signup | AppRoute::Login => RouteGuard::RequireAnonymous,
            AppRoute::Home | AppRoute::Upload | AppRoute::Analysis | AppRoute::Chat => {
                RouteGuard::RequireAuthenticated
            }
        }
    }

    /// Resolve a browser path to a known route.
    ///
    /// Matches on the first segment after the optional [`BASE_PATH`], so
    /// `/login/anything` still resolves to [`AppRoute::Login`]. Unknown
    /// segments yield `None`.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let relative = strip_base(path);
        let first = relative
            .trim_start_matches('/')
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        AppRoute::ALL.into_iter().find(|route| route.segment() == first)
    }
}

/// Coarse UI mode that decides which navigation links are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Intro,
    LogIn,
    MainPages,
}

impl NavigationState {
    /// Links the nav bar shows in this mode.
    pub fn links(self) -> &'static [AppRoute] {
        match self {
            NavigationState::Intro | NavigationState::LogIn => &[AppRoute::Signup, AppRoute::Login],
            NavigationState::MainPages => {
                &[AppRoute::Home, AppRoute::Upload, AppRoute::Analysis, AppRoute::Chat]
            }
        }
    }

    /// Whether the sign-out control belongs in the nav bar.
    pub fn shows_sign_out(self) -> bool {
        matches!(self, NavigationState::MainPages)
    }
}

/// Classify a browser path into a [`NavigationState`].
///
/// Pure function of `path`. Paths outside the route table, including the
/// bare base path, classify as [`NavigationState::Intro`].
pub fn classify(path: &str) -> NavigationState {
    match AppRoute::from_path(path) {
        Some(AppRoute::Login | AppRoute::Signup) => NavigationState::LogIn,
        Some(AppRoute::Home | AppRoute::Upload | AppRoute::Analysis | AppRoute::Chat) => {
            NavigationState::MainPages
        }
        Some(AppRoute::Intro) | None => NavigationState::Intro,
    }
}

fn strip_base(path: &str) -> &str {
    match path.strip_prefix(BASE_PATH) {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest,
        _ => path,
    }
}

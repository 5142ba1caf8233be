use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn login_adjacent_paths_classify_as_log_in() {
    assert_eq!(classify("/login"), NavigationState::LogIn);
    assert_eq!(classify("/signup"), NavigationState::LogIn);
    assert_eq!(classify("/BudgetAI/login"), NavigationState::LogIn);
    assert_eq!(classify("/BudgetAI/signup/"), NavigationState::LogIn);
}

#[test]
fn protected_paths_classify_as_main_pages() {
    for path in ["/home", "/upload", "/analysis", "/chat", "/BudgetAI/chat?draft=1"] {
        assert_eq!(classify(path), NavigationState::MainPages, "{path}");
    }
}

#[test]
fn root_and_unknown_paths_classify_as_intro() {
    assert_eq!(classify("/"), NavigationState::Intro);
    assert_eq!(classify(""), NavigationState::Intro);
    assert_eq!(classify("/BudgetAI"), NavigationState::Intro);
    assert_eq!(classify("/BudgetAI/settings"), NavigationState::Intro);
    assert_eq!(classify("/loginx"), NavigationState::Intro);
}

#[test]
fn classify_is_stable_for_repeated_calls() {
    for path in ["/login", "/home", "/nope", "/BudgetAI/upload"] {
        assert_eq!(classify(path), classify(path));
    }
}

#[test]
fn base_prefix_only_strips_on_segment_boundary() {
    assert_eq!(AppRoute::from_path("/BudgetAIhome"), None);
    assert_eq!(AppRoute::from_path("/BudgetAI/home"), Some(AppRoute::Home));
}

// =============================================================
// AppRoute
// =============================================================

#[test]
fn href_prefixes_base_path() {
    assert_eq!(AppRoute::Intro.href(), "/BudgetAI");
    assert_eq!(AppRoute::Login.href(), "/BudgetAI/login");
    assert_eq!(AppRoute::Analysis.href(), "/BudgetAI/analysis");
}

#[test]
fn every_route_round_trips_through_its_href() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(&route.href()), Some(route));
    }
}

#[test]
fn guards_split_anonymous_and_protected_routes() {
    assert_eq!(AppRoute::Login.guard(), RouteGuard::RequireAnonymous);
    assert_eq!(AppRoute::Signup.guard(), RouteGuard::RequireAnonymous);
    assert_eq!(AppRoute::Intro.guard(), RouteGuard::RequireAnonymous);
    for route in [AppRoute::Home, AppRoute::Upload, AppRoute::Analysis, AppRoute::Chat] {
        assert_eq!(route.guard(), RouteGuard::RequireAuthenticated);
    }
}

// =============================================================
// NavigationState
// =============================================================

#[test]
fn main_pages_show_app_links_and_sign_out() {
    let state = NavigationState::MainPages;
    assert!(state.links().contains(&AppRoute::Upload));
    assert!(state.shows_sign_out());
}

#[test]
fn log_in_mode_hides_app_links() {
    let state = NavigationState::LogIn;
    assert_eq!(state.links(), &[AppRoute::Signup, AppRoute::Login]);
    assert!(!state.shows_sign_out());
}

#[test]
fn base_segment_matches_base_path() {
    assert_eq!(format!("/{BASE_SEGMENT}"), BASE_PATH);
    for route in AppRoute::ALL.into_iter().filter(|r| *r != AppRoute::Intro) {
        assert_eq!(route.href(), format!("/{BASE_SEGMENT}/{}", route.segment()));
    }
}

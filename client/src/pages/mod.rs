//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. [`render_page`] is the single mapping from [`AppRoute`]
//! to a view, used after the route guard allows it.

pub mod analysis;
pub mod chat;
pub mod home;
pub mod intro;
pub mod login;
pub mod signup;
pub mod upload;

use leptos::prelude::*;

use crate::routes::AppRoute;
use analysis::AnalysisPage;
use chat::ChatPage;
use home::HomePage;
use intro::IntroPage;
use login::LoginPage;
use signup::SignupPage;
use upload::UploadPage;

/// Build the view for `route`.
pub fn render_page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Intro => view! { <IntroPage/> }.into_any(),
        AppRoute::Signup => view! { <SignupPage/> }.into_any(),
        AppRoute::Login => view! { <LoginPage/> }.into_any(),
        AppRoute::Home => view! { <HomePage/> }.into_any(),
        AppRoute::Upload => view! { <UploadPage/> }.into_any(),
        AppRoute::Analysis => view! { <AnalysisPage/> }.into_any(),
        AppRoute::Chat => view! { <ChatPage/> }.into_any(),
    }
}

/// Fallback for paths outside the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"Page not found."</h1>
            <a href=AppRoute::Intro.href() class="form__link">
                "Back to BudgetAI"
            </a>
        </div>
    }
}

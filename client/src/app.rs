//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::navbar::Navbar;
use crate::pages::NotFoundPage;
use crate::routes::{AppRoute, BASE_SEGMENT};
use crate::state::{chat::ChatState, session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the session hint and theme
/// once running in the browser, and routes every path through a guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(chat);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        session.set(crate::util::auth::restore_session());
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/budgetai.css"/>
        <Title text="BudgetAI"/>

        <Router>
            <Navbar/>
            <main class="page-holder">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(BASE_SEGMENT) view=|| view! { <Guarded route=AppRoute::Intro/> }/>
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(AppRoute::Signup.segment()))
                        view=|| view! { <Guarded route=AppRoute::Signup/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(AppRoute::Login.segment()))
                        view=|| view! { <Guarded route=AppRoute::Login/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(AppRoute::Home.segment()))
                        view=|| view! { <Guarded route=AppRoute::Home/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(AppRoute::Upload.segment()))
                        view=|| view! { <Guarded route=AppRoute::Upload/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(AppRoute::Analysis.segment()))
                        view=|| view! { <Guarded route=AppRoute::Analysis/> }
                    />
                    <Route
                        path=(StaticSegment(BASE_SEGMENT), StaticSegment(AppRoute::Chat.segment()))
                        view=|| view! { <Guarded route=AppRoute::Chat/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

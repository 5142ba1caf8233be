//! Top navigation bar: brand link, mode-dependent links, theme toggle and
//! sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Which links appear is decided by [`classify`] on the current path alone;
//! the session signal only feeds the identity label.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{AppRoute, classify};
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::end_session;

/// Navigation bar rendered above every page.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let location = use_location();
    let navigate = use_navigate();

    let nav_state = Memo::new(move |_| classify(&location.pathname.get()));

    let on_sign_out = move |_| {
        end_session(session, chat);
        navigate(&AppRoute::Login.href(), NavigateOptions::default());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::signout().await {
                log::warn!("sign-out request failed: {e}");
            }
        });
    };

    view! {
        <nav class="navbar">
            <a href=AppRoute::Intro.href() class="navbar__brand">
                {AppRoute::Intro.label()}
            </a>

            <div class="navbar__links">
                {move || {
                    nav_state
                        .get()
                        .links()
                        .iter()
                        .map(|route| {
                            let href = route.href();
                            let active_href = href.clone();
                            view! {
                                <a
                                    href=href
                                    class="navbar__link"
                                    class:navbar__link--active=move || location.pathname.get() == active_href
                                >
                                    {route.label()}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <span class="navbar__spacer"></span>

            {move || {
                session
                    .get()
                    .display_name()
                    .map(|name| view! { <span class="navbar__identity">{name.to_owned()}</span> })
            }}

            <button
                class="btn navbar__theme-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show when=move || nav_state.get().shows_sign_out()>
                <button class="btn navbar__sign-out" on:click=on_sign_out.clone() title="Sign out">
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}

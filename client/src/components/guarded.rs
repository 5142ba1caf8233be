//! Route wrapper that evaluates a guard before building the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `app::App` renders through [`Guarded`]. Until the session
//! has been read from storage the wrapper shows a neutral placeholder, which
//! keeps server output and the first hydrated frame identical.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::pages::render_page;
use crate::routes::AppRoute;
use crate::state::session::SessionState;
use crate::util::guard::{GuardOutcome, install_guard_redirect};

/// Render `route` if its guard allows the current session, else redirect.
#[component]
pub fn Guarded(route: AppRoute) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let guard = route.guard();
    install_guard_redirect(guard, session, use_navigate());

    let outcome = Memo::new(move |_| guard.evaluate_session(&session.get()));

    move || match outcome.get() {
        Some(GuardOutcome::Allow) => render_page(route),
        Some(GuardOutcome::RedirectTo(_)) => {
            view! { <div class="page page--pending">"Redirecting..."</div> }.into_any()
        }
        None => view! { <div class="page page--pending"></div> }.into_any(),
    }
}

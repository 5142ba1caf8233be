//! Email and password login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::session::SessionState;
use crate::util::validation::{Field, FieldErrors, LoginForm, validate_login};

/// Login route. Posts to `/user/login` and records the session on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = LoginForm { email: email.get(), password: password.get() };
        let req = match validate_login(&form) {
            Ok(req) => req,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        info.set("Logging in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&req).await {
                    Ok(body) => {
                        let identity = crate::util::auth::identity_from(&body, &req.email);
                        crate::util::auth::establish_session(session, &identity);
                        info.set(String::new());
                        navigate(&AppRoute::Home.href(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("login failed: {e}");
                        info.set(crate::net::api::failure_message("Login", &e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (req, session, &navigate);
        }
    };

    view! {
        <div class="page auth-page">
            <h1>"Log In"</h1>
            <form class="form card" on:submit=on_submit>
                <label class="form__label" for="login-email">
                    "Email"
                </label>
                <input
                    id="login-email"
                    class="form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || errors.get().get(Field::Email).map(|message| view! { <p class="form__error">{message}</p> })}

                <label class="form__label" for="login-password">
                    "Password"
                </label>
                <input
                    id="login-password"
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || {
                    errors.get().get(Field::Password).map(|message| view! { <p class="form__error">{message}</p> })
                }}

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit"
                </button>
                <a href=AppRoute::Signup.href() class="form__link">
                    "Don't have an account yet? Click here!"
                </a>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}

//! Account creation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates locally, posts to `/user/signup`, then records the session and
//! moves on to the home route. The intro route reuses [`SignupForm`].

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::password_helper::PasswordHelper;
use crate::routes::AppRoute;
use crate::state::session::SessionState;
use crate::util::validation::{Field, FieldErrors, SignupForm as SignupInput, validate_signup};

/// Signup route: heading plus the form.
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="page auth-page">
            <h1>"Sign Up"</h1>
            <SignupForm/>
        </div>
    }
}

/// Username, email and password fields with inline validation.
#[component]
pub fn SignupForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let editing_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = SignupInput {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        let req = match validate_signup(&input) {
            Ok(req) => req,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&req).await {
                    Ok(body) => {
                        let identity = crate::util::auth::identity_from(&body, &req.name);
                        crate::util::auth::establish_session(session, &identity);
                        info.set(String::new());
                        navigate(&AppRoute::Home.href(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("signup failed: {e}");
                        info.set(crate::net::api::failure_message("Sign up", &e));
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

    let field_error = move |field: Field| {
        move || errors.get().get(field).map(|message| view! { <p class="form__error">{message}</p> })
    };

    view! {
        <form class="form card" on:submit=on_submit>
            <label class="form__label" for="signup-username">
                "Username"
            </label>
            <input
                id="signup-username"
                class="form__input"
                type="text"
                placeholder="At least 2 characters"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            {field_error(Field::Username)}

            <label class="form__label" for="signup-email">
                "Email"
            </label>
            <input
                id="signup-email"
                class="form__input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            {field_error(Field::Email)}

            <label class="form__label" for="signup-password">
                "Password"
            </label>
            <input
                id="signup-password"
                class="form__input"
                type="password"
                placeholder="Min. 8 characters"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
                on:focus=move |_| editing_password.set(true)
                on:blur=move |_| editing_password.set(false)
            />
            {field_error(Field::Password)}
            <Show when=move || editing_password.get()>
                <PasswordHelper password=password/>
            </Show>

            <label class="form__label" for="signup-confirm">
                "Enter Password Again"
            </label>
            <input
                id="signup-confirm"
                class="form__input"
                type="password"
                placeholder="Making sure you know it"
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
            {field_error(Field::ConfirmPassword)}

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Submit"
            </button>
            <a href=AppRoute::Login.href() class="form__link">
                "Already have an account? Click here!"
            </a>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

//! Landing route for signed-out visitors.

use leptos::prelude::*;

use crate::pages::signup::SignupForm;

/// Welcome copy followed by the signup form.
#[component]
pub fn IntroPage() -> impl IntoView {
    view! {
        <div class="page auth-page intro-page">
            <h1>"Welcome to BudgetAI"</h1>
            <p class="intro-page__lead">
                "Upload your bank exports, see where the money goes, and ask questions about your spending."
            </p>
            <SignupForm/>
        </div>
    }
}

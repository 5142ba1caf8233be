//! Live password checklist shown while the signup password field has focus.

use leptos::prelude::*;

use crate::util::password::{PasswordRule, PasswordStrength};

/// Checklist of password rules, each marked met or unmet.
#[component]
pub fn PasswordHelper(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| PasswordStrength::assess(&password.get()));

    view! {
        <div class="password-helper">
            {move || {
                let strength = strength.get();
                if strength.is_good() {
                    return view! {
                        <p class="password-helper__verdict password-helper__verdict--good">
                            "That is a nice password!"
                        </p>
                    }
                        .into_any();
                }
                let rules = PasswordRule::ALL
                    .into_iter()
                    .map(|rule| {
                        let met = strength.satisfies(rule);
                        view! {
                            <li class="password-helper__rule" class:password-helper__rule--met=met>
                                {rule.description()}
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <div>
                        <p class="password-helper__verdict">"Passwords must have:"</p>
                        <ul class="password-helper__rules">{rules}</ul>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

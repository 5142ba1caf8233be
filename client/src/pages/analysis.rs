//! Spending analysis: filter transactions by category and time frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transactions load once on mount. Dropdown changes only edit the draft
//! filter; "Apply" promotes it and the table re-renders from the applied one.

use leptos::prelude::*;

use crate::components::transactions_table::{TransactionsTable, format_amount};
use crate::state::analysis::{AnalysisState, CategoryFilter, TimeFrame, category_options, today, total_amount};

/// Analysis route.
#[component]
pub fn AnalysisPage() -> impl IntoView {
    let state = RwSignal::new(AnalysisState { loading: true, ..AnalysisState::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_transactions().await {
            Ok(rows) => state.update(|s| {
                s.transactions = rows;
                s.error = None;
            }),
            Err(e) => {
                log::error!("transactions failed: {e}");
                let message = crate::net::api::failure_message("Loading transactions", &e);
                state.update(|s| s.error = Some(message));
            }
        }
        state.update(|s| s.loading = false);
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible(today())));
    let options = Memo::new(move |_| state.with(|s| category_options(&s.transactions)));

    let on_category = move |ev: leptos::ev::Event| {
        let label = event_target_value(&ev);
        state.update(|s| s.draft.category = CategoryFilter::from_label(&label));
    };
    let on_time_frame = move |ev: leptos::ev::Event| {
        if let Some(frame) = TimeFrame::from_key(&event_target_value(&ev)) {
            state.update(|s| s.draft.time_frame = frame);
        }
    };

    view! {
        <div class="page analysis-page">
            <h1>"Spending Analysis"</h1>

            <div class="card analysis-page__filters">
                <label class="form__label" for="analysis-category">
                    "Category"
                </label>
                <select id="analysis-category" class="form__input" on:change=on_category>
                    {move || {
                        let selected = state.with(|s| s.draft.category.label().to_owned());
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let is_selected = option == selected;
                                view! {
                                    <option value=option.clone() selected=is_selected>
                                        {option.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>

                <label class="form__label" for="analysis-time-frame">
                    "Time frame"
                </label>
                <select id="analysis-time-frame" class="form__input" on:change=on_time_frame>
                    {move || {
                        let selected = state.with(|s| s.draft.time_frame);
                        TimeFrame::ALL
                            .into_iter()
                            .map(|frame| {
                                view! {
                                    <option value=frame.key() selected={frame == selected}>
                                        {frame.label()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>

                <button class="btn btn--primary" on:click=move |_| state.update(AnalysisState::apply_draft)>
                    "Apply"
                </button>
            </div>

            {move || {
                let s = state.get();
                if s.loading {
                    return view! { <p class="analysis-page__status">"Loading transactions..."</p> }.into_any();
                }
                if let Some(message) = s.error {
                    return view! { <p class="form__error">{message}</p> }.into_any();
                }
                view! {
                    <p class="analysis-page__summary">
                        {format!(
                            "{} · {}: {}",
                            s.applied.category.label(),
                            s.applied.time_frame.label(),
                            format_amount(total_amount(&visible.get())),
                        )}
                    </p>
                    <TransactionsTable rows=visible/>
                }
                    .into_any()
            }}
        </div>
    }
}

//! Signed-in home: spending trend chart and generated insights.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both panels load concurrently on mount; each shows its own empty or error
//! state so one failing endpoint does not blank the page.

use leptos::prelude::*;

use crate::components::spending_chart::SpendingChart;
use crate::state::session::SessionState;
use crate::util::chart::ChartData;

/// Home route.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let chart = RwSignal::new(ChartData::default());
    let chart_loading = RwSignal::new(true);
    let insights = RwSignal::new(Vec::<String>::new());
    let insights_loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (totals, trends) =
            futures::join!(crate::net::api::fetch_monthly_totals(), crate::net::api::fetch_insights());
        match totals {
            Ok(totals) => chart.set(crate::util::chart::build_series(&totals)),
            Err(e) => {
                log::error!("monthly totals failed: {e}");
                error.set(Some(crate::net::api::failure_message("Loading spending", &e)));
            }
        }
        chart_loading.set(false);
        match trends {
            Ok(lines) => insights.set(lines),
            Err(e) => log::warn!("insights failed: {e}"),
        }
        insights_loading.set(false);
    });

    let greeting = move || {
        session
            .get()
            .display_name()
            .map_or_else(|| "Welcome back".to_owned(), |name| format!("Welcome back, {name}"))
    };

    view! {
        <div class="page home-page">
            <h1>{greeting}</h1>

            <section class="card home-page__chart">
                <h2>"Spending Chart"</h2>
                <SpendingChart data=chart loading=chart_loading/>
                {move || error.get().map(|message| view! { <p class="form__error">{message}</p> })}
            </section>

            <section class="card home-page__insights">
                <h2>"Your Trends"</h2>
                {move || {
                    if insights_loading.get() {
                        return view! { <p class="home-page__status">"Loading insights..."</p> }.into_any();
                    }
                    let lines = insights.get();
                    if lines.is_empty() {
                        return view! { <p class="home-page__status">"No insights yet."</p> }.into_any();
                    }
                    view! {
                        <ul class="home-page__trend-list">
                            {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}

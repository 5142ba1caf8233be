//! SVG line chart of monthly spending per category.

use leptos::prelude::*;

use crate::util::chart::{CHART_HEIGHT, CHART_PADDING, CHART_WIDTH, ChartData, polyline_points, x_at};

/// One polyline per category over the month axis.
#[component]
pub fn SpendingChart(#[prop(into)] data: Signal<ChartData>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="chart">
            {move || {
                if loading.get() {
                    return view! { <p class="chart__status">"Loading chart..."</p> }.into_any();
                }
                let data = data.get();
                if data.is_empty() {
                    return view! { <p class="chart__status">"No data available."</p> }.into_any();
                }

                let max = data.max_value();
                let count = data.months.len();
                let baseline = format!("{:.1}", CHART_HEIGHT - CHART_PADDING);
                let tick_y = format!("{:.1}", CHART_HEIGHT - CHART_PADDING / 3.0);

                let lines = data
                    .series
                    .iter()
                    .map(|series| {
                        view! {
                            <polyline
                                class="chart__line"
                                points=polyline_points(&series.values, max)
                                fill="none"
                                stroke=series.color.clone()
                                stroke-width="2"
                            />
                        }
                    })
                    .collect_view();

                let ticks = data
                    .months
                    .iter()
                    .enumerate()
                    .map(|(index, month)| {
                        view! {
                            <text
                                class="chart__tick"
                                x=format!("{:.1}", x_at(index, count))
                                y=tick_y.clone()
                                text-anchor="middle"
                            >
                                {month.clone()}
                            </text>
                        }
                    })
                    .collect_view();

                let legend = data
                    .series
                    .iter()
                    .map(|series| {
                        view! {
                            <li class="chart__legend-item">
                                <span
                                    class="chart__swatch"
                                    style=format!("background-color: {}", series.color)
                                ></span>
                                {series.category.clone()}
                            </li>
                        }
                    })
                    .collect_view();

                view! {
                    <svg
                        class="chart__svg"
                        viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                        role="img"
                        aria-label="Monthly spending by category"
                    >
                        <line
                            class="chart__axis"
                            x1=format!("{CHART_PADDING:.1}")
                            y1=baseline.clone()
                            x2=format!("{:.1}", CHART_WIDTH - CHART_PADDING)
                            y2=baseline
                        />
                        {lines}
                        {ticks}
                    </svg>
                    <ul class="chart__legend">{legend}</ul>
                }
                    .into_any()
            }}
        </div>
    }
}

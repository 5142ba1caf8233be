//! Table of transactions with a running total footer.

#[cfg(test)]
#[path = "transactions_table_test.rs"]
mod transactions_table_test;

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::state::analysis::total_amount;

/// Filtered transaction rows and their sum.
#[component]
pub fn TransactionsTable(#[prop(into)] rows: Signal<Vec<Transaction>>) -> impl IntoView {
    view! {
        {move || {
            let rows = rows.get();
            if rows.is_empty() {
                return view! { <p class="table__empty">"No transactions match these filters."</p> }.into_any();
            }
            let total = format_amount(total_amount(&rows));
            let body = rows
                .into_iter()
                .map(|tx| {
                    view! {
                        <tr>
                            <td>{tx.transaction_date}</td>
                            <td>{tx.description}</td>
                            <td>{tx.category}</td>
                            <td class="table__amount">{format_amount(tx.amount)}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Description"</th>
                            <th>"Category"</th>
                            <th class="table__amount">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                    <tfoot>
                        <tr>
                            <td colspan="3">"Total"</td>
                            <td class="table__amount">{total}</td>
                        </tr>
                    </tfoot>
                </table>
            }
                .into_any()
        }}
    }
}

/// Dollar amount with two decimals, sign before the currency symbol.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

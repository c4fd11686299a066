//! Spending totals by category and, when a year is filtered, by month.

#[cfg(test)]
#[path = "summary_panel_test.rs"]
mod summary_panel_test;

use leptos::prelude::*;
use records::ChartSummary;

use crate::state::summary::SummaryState;
use crate::util::dom;

#[component]
pub fn SummaryPanel(summary: RwSignal<SummaryState>) -> impl IntoView {
    let by_category = move || summary.with(|s| s.by_category.clone());
    let monthly = move || summary.with(|s| s.monthly.clone().zip(s.monthly_year.clone()));
    let error = move || summary.with(|s| s.error.clone());

    view! {
        <section id=dom::EXPENSE_SUMMARY class="expense-summary" class:expense-summary--loading=move || summary.with(|s| s.loading)>
            {move || error().map(|message| view! { <p class="expense-summary__error">{message}</p> })}
            {move || by_category().map(|chart| view! { <SummaryTable caption="By category".to_owned() chart=chart /> })}
            {move || {
                monthly()
                    .map(|(chart, year)| view! { <SummaryTable caption=format!("By month, {year}") chart=chart /> })
            }}
        </section>
    }
}

#[component]
fn SummaryTable(caption: String, chart: ChartSummary) -> impl IntoView {
    let rows = summary_rows(&chart);
    let total = format_total(chart.total());

    view! {
        <table class="expense-summary__table">
            <caption>{caption}</caption>
            <tbody>
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <tr>
                                <td>{label}</td>
                                <td class="expense-summary__value">{value}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
            <tfoot>
                <tr>
                    <th>"Total"</th>
                    <td class="expense-summary__value">{total}</td>
                </tr>
            </tfoot>
        </table>
    }
}

fn summary_rows(chart: &ChartSummary) -> Vec<(String, String)> {
    chart.rows().map(|(label, value)| (label.to_owned(), format_total(value))).collect()
}

fn format_total(value: f64) -> String {
    format!("{value:.2}")
}

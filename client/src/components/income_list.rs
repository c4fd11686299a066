//! Entries of the income list.
//!
//! Mounted inside the page's existing `income-list` element, so it renders
//! only the `<li>` items.

use leptos::prelude::*;

use crate::state::incomes::IncomesState;

#[component]
pub fn IncomeList(incomes: RwSignal<IncomesState>) -> impl IntoView {
    move || {
        incomes
            .with(IncomesState::entries)
            .into_iter()
            .map(|entry| view! { <li class="income-list__item">{entry}</li> })
            .collect_view()
    }
}

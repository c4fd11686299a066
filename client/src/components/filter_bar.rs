//! Year / month / category / sort inputs above the expense table.
//!
//! Inputs write straight into the board's filter; nothing is requested until
//! the filter button runs `on_filter`.

#[cfg(test)]
#[path = "filter_bar_test.rs"]
mod filter_bar_test;

use leptos::prelude::*;
use records::{ExpenseFilter, SortOrder};

use crate::state::expenses::ExpenseBoardState;
use crate::util::dom;

#[component]
pub fn FilterBar(on_filter: Callback<()>) -> impl IntoView {
    let board = expect_context::<RwSignal<ExpenseBoardState>>();

    view! {
        <form
            class="expense-filter"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_filter.run(());
            }
        >
            <FilterInput field=FilterField::Year />
            <FilterInput field=FilterField::Month />
            <FilterInput field=FilterField::Category />
            <label class="expense-filter__label">
                "Sort"
                <select
                    id=dom::FILTER_SORT
                    name="sort"
                    prop:value=move || board.with(|s| sort_value(s.filter.sort).to_owned())
                    on:change=move |ev| {
                        let sort = parse_sort(&event_target_value(&ev));
                        board.update(|s| s.filter.sort = sort);
                    }
                >
                    <option value="">"Default"</option>
                    <option value="asc">"Amount ↑"</option>
                    <option value="desc">"Amount ↓"</option>
                </select>
            </label>
            <button id=dom::FILTER_BTN type="submit" class="btn">
                "Filter"
            </button>
        </form>
    }
}

/// Free-text filter inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterField {
    Year,
    Month,
    Category,
}

impl FilterField {
    fn id(self) -> &'static str {
        match self {
            Self::Year => dom::FILTER_YEAR,
            Self::Month => dom::FILTER_MONTH,
            Self::Category => dom::FILTER_CATEGORY,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Category => "Category",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Year => "YYYY",
            Self::Month => "MM",
            Self::Category => "e.g. groceries",
        }
    }

    fn get(self, filter: &ExpenseFilter) -> &str {
        match self {
            Self::Year => &filter.year,
            Self::Month => &filter.month,
            Self::Category => &filter.category_name,
        }
    }

    fn set(self, filter: &mut ExpenseFilter, value: String) {
        match self {
            Self::Year => filter.year = value,
            Self::Month => filter.month = value,
            Self::Category => filter.category_name = value,
        }
    }
}

#[component]
fn FilterInput(field: FilterField) -> impl IntoView {
    let board = expect_context::<RwSignal<ExpenseBoardState>>();

    view! {
        <label class="expense-filter__label">
            {field.label()}
            <input
                id=field.id()
                name=field.id()
                type="text"
                class="expense-filter__input"
                placeholder=field.placeholder()
                prop:value=move || board.with(|s| field.get(&s.filter).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    board.update(|s| field.set(&mut s.filter, value));
                }
            />
        </label>
    }
}

fn sort_value(sort: Option<SortOrder>) -> &'static str {
    sort.map_or("", SortOrder::as_str)
}

fn parse_sort(raw: &str) -> Option<SortOrder> {
    raw.parse().ok()
}

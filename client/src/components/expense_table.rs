//! Expense table body: one row per record with an Edit action.

#[cfg(test)]
#[path = "expense_table_test.rs"]
mod expense_table_test;

use leptos::prelude::*;
use records::Expense;

use crate::state::expenses::ExpenseBoardState;
use crate::util::dom;

/// Column headings, in cell order.
pub const COLUMNS: [&str; 5] = ["Amount", "Description", "Category", "Date", "Location"];

/// Table header plus a body that is rebuilt whenever the rows change.
#[component]
pub fn ExpenseTable(on_edit: Callback<String>) -> impl IntoView {
    let board = expect_context::<RwSignal<ExpenseBoardState>>();
    let rows = Memo::new(move |_| board.with(|s| s.items.clone()));
    let loading = move || board.with(|s| s.loading);

    view! {
        <table class="expenses__table" class:expenses__table--loading=loading>
            <thead>
                <tr>
                    {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id=dom::EXPENSES_TABLE_BODY>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|expense| {
                            let id = expense.id.clone();
                            view! {
                                <tr data-expense-id=expense.id.clone()>
                                    {row_cells(&expense).into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                    <td>
                                        <button
                                            type="button"
                                            class="btn btn--small"
                                            on:click=move |_| on_edit.run(id.clone())
                                        >
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

/// Cell text for a row, exactly as the server sent each value.
fn row_cells(expense: &Expense) -> [String; 5] {
    [
        expense.amount.to_string(),
        expense.description.clone(),
        expense.category_label().to_owned(),
        expense.expense_date.clone(),
        expense.location.clone(),
    ]
}

//! Expense table and dialog orchestration.
//!
//! Every request follows the same shape: start a transition on the board
//! state, await the API without holding the state, then apply the result in a
//! second short update. A write that succeeds triggers exactly one list
//! refresh; a write that fails triggers none.

#[cfg(test)]
#[path = "expense_list_test.rs"]
mod expense_list_test;

use records::ExpenseApi;

use crate::state::expenses::{ExpenseBoardState, SubmitRequest};
use crate::state::modal::ModalKind;
use crate::state::store::Store;

pub struct ExpenseListController<A, S> {
    api: A,
    board: S,
}

impl<A, S> ExpenseListController<A, S>
where
    A: ExpenseApi,
    S: Store<ExpenseBoardState>,
{
    pub fn new(api: A, board: S) -> Self {
        Self { api, board }
    }

    /// Re-fetch rows for the current filter and replace the table body.
    ///
    /// Returns `false` when the board is gone or a newer fetch superseded this one.
    pub async fn fetch_expenses(&self) -> bool {
        let Some((seq, filter)) = self.board.update_with(ExpenseBoardState::begin_fetch) else {
            return false;
        };
        let result = self.api.list_expenses(&filter).await;
        if let Err(err) = &result {
            log::warn!("expense list request failed: {err}");
        }
        let applied = self.board.update_with(|s| s.finish_fetch(seq, result)).unwrap_or(false);
        if !applied {
            log::debug!("dropped stale expense list response seq={seq}");
        }
        applied
    }

    /// Load the freshest copy of one record into the edit dialog and show it.
    ///
    /// Returns `false` when a later edit action or closing the dialog superseded this load.
    pub async fn open_edit_modal(&self, expense_id: &str) -> bool {
        let Some(seq) = self.board.update_with(ExpenseBoardState::begin_open_edit) else {
            return false;
        };
        let result = self.api.get_expense(expense_id).await;
        if let Err(err) = &result {
            log::warn!("expense {expense_id} could not be loaded for editing: {err}");
        }
        let applied = self.board.update_with(|s| s.finish_open_edit(seq, result)).unwrap_or(false);
        if !applied {
            log::debug!("dropped stale load of expense {expense_id} seq={seq}");
        }
        applied
    }

    pub async fn submit_add(&self) -> bool {
        self.submit(ModalKind::Add).await
    }

    pub async fn submit_edit(&self) -> bool {
        self.submit(ModalKind::Edit).await
    }

    /// Send one dialog's form. Returns whether it succeeded (and the list was refreshed).
    async fn submit(&self, kind: ModalKind) -> bool {
        let Some(request) = self.board.update_with(|s| s.begin_submit(kind)).flatten() else {
            return false;
        };
        let result = match &request {
            SubmitRequest::Create { category_name, payload } => {
                self.api.create_expense(category_name, payload).await
            }
            SubmitRequest::Update { expense_id, payload } => self.api.update_expense(expense_id, payload).await,
        };
        if let Err(err) = &result {
            log::warn!("expense {kind:?} submit failed: {err}");
        }
        let refresh = self.board.update_with(|s| s.finish_submit(kind, result)).unwrap_or(false);
        if refresh {
            self.fetch_expenses().await;
        }
        refresh
    }
}

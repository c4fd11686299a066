//! Expense page state: filter, table rows, both dialogs and their forms.
//!
//! DESIGN
//! ======
//! All transitions are synchronous methods so the controller can apply a
//! response in one short update. Request-starting methods hand back what the
//! request needs (sequence number, filter, payload); completion methods take
//! the `Result` and decide what the UI does next.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use records::{ApiError, Expense, ExpenseFilter, FormPayload};

use super::modal::{ModalKind, ModalVisibility};
use super::notice::{Notice, Operation};

/// Editable fields shared by the add and edit forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Amount,
    Description,
    Category,
    ExpenseDate,
    Location,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Amount,
        Self::Description,
        Self::Category,
        Self::ExpenseDate,
        Self::Location,
    ];

    /// Form field name for a dialog; this is the key sent in the JSON body.
    #[must_use]
    pub fn name(self, kind: ModalKind) -> &'static str {
        match (self, kind) {
            (Self::Amount, _) => "amount",
            (Self::Description, _) => "description",
            (Self::Category, ModalKind::Add) => "category_name",
            (Self::Category, ModalKind::Edit) => "category",
            (Self::ExpenseDate, _) => "expense_date",
            (Self::Location, _) => "location",
        }
    }
}

/// Current values of one expense form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub expense_date: String,
    pub location: String,
}

impl ExpenseForm {
    /// Form values mirroring a server record.
    #[must_use]
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.to_string(),
            description: expense.description.clone(),
            category: expense.category.clone().unwrap_or_default(),
            expense_date: expense.expense_date.clone(),
            location: expense.location.clone(),
        }
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.amount,
            FormField::Description => &self.description,
            FormField::Category => &self.category,
            FormField::ExpenseDate => &self.expense_date,
            FormField::Location => &self.location,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Amount => self.amount = value,
            FormField::Description => self.description = value,
            FormField::Category => self.category = value,
            FormField::ExpenseDate => self.expense_date = value,
            FormField::Location => self.location = value,
        }
    }

    /// Flatten every field into the request body for the given dialog.
    #[must_use]
    pub fn payload(&self, kind: ModalKind) -> FormPayload {
        FormField::ALL
            .into_iter()
            .map(|field| (field.name(kind), self.field(field).to_owned()))
            .collect()
    }
}

/// A write request prepared from one of the dialogs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Create { category_name: String, payload: FormPayload },
    Update { expense_id: String, payload: FormPayload },
}

/// Everything the expense page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseBoardState {
    pub filter: ExpenseFilter,
    /// Rows of the table body, in response order.
    pub items: Vec<Expense>,
    pub loading: bool,
    /// Sequence number of the most recently issued list request.
    pub list_seq: u64,
    pub add_modal: ModalVisibility,
    pub edit_modal: ModalVisibility,
    pub add_form: ExpenseForm,
    pub edit_form: ExpenseForm,
    /// Hidden `edit-expense-id` value, set when the edit dialog is populated.
    pub editing_id: String,
    pub add_pending: bool,
    pub edit_pending: bool,
    /// Sequence number of the most recent edit load; closing the edit dialog bumps it.
    pub edit_load_seq: u64,
    /// How many times each dialog has been opened.
    pub add_opened: u64,
    pub edit_opened: u64,
    /// Open count of each dialog when its in-flight submit started.
    pub add_submitted_in: u64,
    pub edit_submitted_in: u64,
    pub notice: Option<Notice>,
}

impl ExpenseBoardState {
    /// Start a list request; returns its sequence number and the filter to send.
    pub fn begin_fetch(&mut self) -> (u64, ExpenseFilter) {
        self.list_seq += 1;
        self.loading = true;
        (self.list_seq, self.filter.clone())
    }

    /// Apply a list response. Returns `false` when a newer request superseded it.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<Expense>, ApiError>) -> bool {
        if seq != self.list_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.clear_notice_from(Operation::LoadExpenses);
            }
            Err(err) => self.notice = Some(Notice::failure(Operation::LoadExpenses, &err)),
        }
        true
    }

    /// Start loading a record for the edit dialog; returns the load's sequence number.
    pub fn begin_open_edit(&mut self) -> u64 {
        self.edit_load_seq += 1;
        self.edit_load_seq
    }

    /// Apply the detail response for the edit action.
    ///
    /// Success overwrites every edit field and shows the dialog; failure keeps
    /// it hidden. A response superseded by a newer load, or by closing the
    /// dialog, is ignored and `false` is returned.
    pub fn finish_open_edit(&mut self, seq: u64, result: Result<Expense, ApiError>) -> bool {
        if seq != self.edit_load_seq {
            return false;
        }
        match result {
            Ok(expense) => {
                self.editing_id.clone_from(&expense.id);
                self.edit_form = ExpenseForm::from_expense(&expense);
                self.edit_opened += 1;
                self.edit_modal.open();
                self.clear_notice_from(Operation::OpenExpense);
            }
            Err(err) => self.notice = Some(Notice::failure(Operation::OpenExpense, &err)),
        }
        true
    }

    /// Show the add dialog with an empty form.
    ///
    /// A submit still in flight keeps its pending flag, so the reopened form
    /// cannot be sent until that request completes.
    pub fn open_add_modal(&mut self) {
        self.add_form = ExpenseForm::default();
        self.add_opened += 1;
        self.add_modal.open();
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        self.modal_mut(kind).close();
        self.cancel_edit_load(kind);
    }

    /// Backdrop click on one dialog; only that dialog is affected.
    pub fn dismiss_from_backdrop(&mut self, kind: ModalKind) -> bool {
        let closed = self.modal_mut(kind).dismiss_from_backdrop();
        if closed {
            self.cancel_edit_load(kind);
        }
        closed
    }

    /// A closed edit dialog must not be reopened by a load issued earlier.
    fn cancel_edit_load(&mut self, kind: ModalKind) {
        if kind == ModalKind::Edit {
            self.edit_load_seq += 1;
        }
    }

    #[must_use]
    pub fn modal(&self, kind: ModalKind) -> ModalVisibility {
        match kind {
            ModalKind::Add => self.add_modal,
            ModalKind::Edit => self.edit_modal,
        }
    }

    fn modal_mut(&mut self, kind: ModalKind) -> &mut ModalVisibility {
        match kind {
            ModalKind::Add => &mut self.add_modal,
            ModalKind::Edit => &mut self.edit_modal,
        }
    }

    #[must_use]
    pub fn form(&self, kind: ModalKind) -> &ExpenseForm {
        match kind {
            ModalKind::Add => &self.add_form,
            ModalKind::Edit => &self.edit_form,
        }
    }

    pub fn form_mut(&mut self, kind: ModalKind) -> &mut ExpenseForm {
        match kind {
            ModalKind::Add => &mut self.add_form,
            ModalKind::Edit => &mut self.edit_form,
        }
    }

    #[must_use]
    pub fn is_pending(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Add => self.add_pending,
            ModalKind::Edit => self.edit_pending,
        }
    }

    /// Prepare a submission; `None` while the same dialog is already submitting.
    pub fn begin_submit(&mut self, kind: ModalKind) -> Option<SubmitRequest> {
        if self.is_pending(kind) {
            return None;
        }
        let payload = self.form(kind).payload(kind);
        let request = match kind {
            ModalKind::Add => {
                self.add_pending = true;
                self.add_submitted_in = self.add_opened;
                SubmitRequest::Create { category_name: self.add_form.category.trim().to_owned(), payload }
            }
            ModalKind::Edit => {
                self.edit_pending = true;
                self.edit_submitted_in = self.edit_opened;
                SubmitRequest::Update { expense_id: self.editing_id.clone(), payload }
            }
        };
        Some(request)
    }

    /// Apply a write response. Returns `true` when the list must be refreshed.
    ///
    /// Success closes the dialog, unless it was reopened after the submit
    /// started; failure leaves it open with its values intact.
    pub fn finish_submit(&mut self, kind: ModalKind, result: Result<(), ApiError>) -> bool {
        let (origin, submitted_in, opened) = match kind {
            ModalKind::Add => {
                self.add_pending = false;
                (Operation::CreateExpense, self.add_submitted_in, self.add_opened)
            }
            ModalKind::Edit => {
                self.edit_pending = false;
                (Operation::UpdateExpense, self.edit_submitted_in, self.edit_opened)
            }
        };
        match result {
            Ok(()) => {
                if submitted_in == opened {
                    self.modal_mut(kind).close();
                }
                self.notice = Notice::success(origin);
                true
            }
            Err(err) => {
                self.notice = Some(Notice::failure(origin, &err));
                false
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn clear_notice_from(&mut self, origin: Operation) {
        if self.notice.as_ref().is_some_and(|n| n.origin == origin) {
            self.notice = None;
        }
    }
}

//! Element ids of the page contract and browser lookups.
//!
//! Ids are shared with the server-rendered template and the stylesheet, so
//! they are fixed strings rather than generated names.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::state::expenses::FormField;
use crate::state::modal::ModalKind;

pub const EXPENSES_APP: &str = "expenses-app";
pub const INCOME_LIST: &str = "income-list";

pub const ADD_EXPENSE_MODAL: &str = "add-expense-modal";
pub const EDIT_EXPENSE_MODAL: &str = "edit-expense-modal";
pub const ADD_EXPENSE_BTN: &str = "add-expense-btn";
pub const CLOSE_ADD_EXPENSE: &str = "close-add-expense";
pub const CLOSE_EDIT_EXPENSE: &str = "close-edit-expense";
pub const ADD_EXPENSE_FORM: &str = "add-expense-form";
pub const EDIT_EXPENSE_FORM: &str = "edit-expense-form";
pub const EDIT_EXPENSE_ID: &str = "edit-expense-id";
pub const EXPENSES_TABLE_BODY: &str = "expenses-table-body";

pub const FILTER_YEAR: &str = "year";
pub const FILTER_MONTH: &str = "month";
pub const FILTER_CATEGORY: &str = "category_name";
pub const FILTER_SORT: &str = "sort";
pub const FILTER_BTN: &str = "filter-expenses-btn";

pub const EXPENSE_NOTICE: &str = "expense-notice";
pub const EXPENSE_SUMMARY: &str = "expense-summary";

pub const META_USER_ID: &str = "expenses-user-id";
pub const META_API_BASE: &str = "expenses-api-base";
pub const META_API_TOKEN: &str = "expenses-api-token";

#[must_use]
pub fn modal_id(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Add => ADD_EXPENSE_MODAL,
        ModalKind::Edit => EDIT_EXPENSE_MODAL,
    }
}

#[must_use]
pub fn form_id(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Add => ADD_EXPENSE_FORM,
        ModalKind::Edit => EDIT_EXPENSE_FORM,
    }
}

#[must_use]
pub fn close_button_id(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Add => CLOSE_ADD_EXPENSE,
        ModalKind::Edit => CLOSE_EDIT_EXPENSE,
    }
}

/// Input id for one form field, e.g. `edit-budget` or `add-category`.
#[must_use]
pub fn field_id(kind: ModalKind, field: FormField) -> String {
    let prefix = match kind {
        ModalKind::Add => "add",
        ModalKind::Edit => "edit",
    };
    let suffix = match field {
        FormField::Amount => "budget",
        FormField::Description => "description",
        FormField::Category => "category",
        FormField::ExpenseDate => "date",
        FormField::Location => "location",
    };
    format!("{prefix}-{suffix}")
}

/// Content of `<meta name="{name}">`, if present and non-blank.
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{name}\"]");
        let element = document.query_selector(&selector).ok().flatten()?;
        element
            .get_attribute("content")
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// Look up an element by id as an `HtmlElement`.
#[cfg(feature = "csr")]
pub fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

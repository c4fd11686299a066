//! Path builders for the REST endpoints the clients consume.
//!
//! Paths are relative; transports prefix them with [`crate::ApiSession::url`].
//! Dynamic path segments are percent-encoded.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::filter::ExpenseFilter;

/// Income collection for the authenticated user.
pub const INCOMES: &str = "/incomes/";

fn segment(raw: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(raw)
}

/// `GET /expenses/{userId}/?...` with the non-empty filter criteria.
#[must_use]
pub fn expense_list(user_id: &str, filter: &ExpenseFilter) -> String {
    format!("/expenses/{}/{}", segment(user_id), filter.query_string())
}

/// `GET`/`PUT /expenses/update/{expenseId}/`; the server uses one path for read and update.
#[must_use]
pub fn expense_detail(expense_id: &str) -> String {
    format!("/expenses/update/{}/", segment(expense_id))
}

/// `DELETE /expenses/delete/{expenseId}/`.
#[must_use]
pub fn expense_delete(expense_id: &str) -> String {
    format!("/expenses/delete/{}/", segment(expense_id))
}

/// `PUT /incomes/{userId}/`; partial update of the user's income record.
#[must_use]
pub fn income_detail(user_id: &str) -> String {
    format!("/incomes/{}/", segment(user_id))
}

/// `POST /expenses/add/{userId}/{categoryName}/`.
#[must_use]
pub fn expense_create(user_id: &str, category_name: &str) -> String {
    format!("/expenses/add/{}/{}/", segment(user_id), segment(category_name.trim()))
}

/// `GET /expenses/{userId}/monthly-summary/?year={year}`.
#[must_use]
pub fn monthly_summary(user_id: &str, year: &str) -> String {
    format!(
        "/expenses/{}/monthly-summary/?year={}",
        segment(user_id),
        urlencoding::encode(year.trim())
    )
}

/// `GET /expenses/{userId}/category-summary/`.
#[must_use]
pub fn category_summary(user_id: &str) -> String {
    format!("/expenses/{}/category-summary/", segment(user_id))
}

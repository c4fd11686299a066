//! Transport seam for the expense/income REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client implements [`ExpenseApi`] over `gloo-net`, the CLI over
//! `reqwest`, and controller tests over an in-memory fake. Both real
//! transports hand raw status + body text to [`decode_body`] / [`check_status`]
//! so status handling and JSON decoding behave identically everywhere.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::filter::ExpenseFilter;
use crate::types::{ChartSummary, Expense, FormPayload, Income, IncomeListing};

/// Operations the clients perform against the server.
pub trait ExpenseApi {
    /// `GET /expenses/{userId}/?...`
    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ApiError>;

    /// `GET /expenses/update/{expenseId}/`
    async fn get_expense(&self, expense_id: &str) -> Result<Expense, ApiError>;

    /// `POST /expenses/add/{userId}/{categoryName}/`
    async fn create_expense(&self, category_name: &str, payload: &FormPayload) -> Result<(), ApiError>;

    /// `PUT /expenses/update/{expenseId}/`
    async fn update_expense(&self, expense_id: &str, payload: &FormPayload) -> Result<(), ApiError>;

    /// `DELETE /expenses/delete/{expenseId}/`
    async fn delete_expense(&self, expense_id: &str) -> Result<(), ApiError>;

    /// `GET /incomes/`
    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError>;

    /// `PUT /incomes/{userId}/` with the fields to change; returns the stored record.
    async fn update_income(&self, payload: &FormPayload) -> Result<Income, ApiError>;

    /// `GET /expenses/{userId}/monthly-summary/?year={year}`
    async fn monthly_summary(&self, year: &str) -> Result<ChartSummary, ApiError>;

    /// `GET /expenses/{userId}/category-summary/`
    async fn category_summary(&self) -> Result<ChartSummary, ApiError>;
}

#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Succeed on 2xx, otherwise classify the failure from the body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] or [`ApiError::Rejected`] for non-2xx statuses.
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status, body))
    }
}

/// Decode a JSON response body after checking its status.
///
/// # Errors
///
/// Returns a status error for non-2xx responses and [`ApiError::Decode`] when
/// the body does not match `T`.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode the income endpoint, which may answer with one record or a list.
///
/// # Errors
///
/// Same as [`decode_body`].
pub fn decode_incomes(status: u16, body: &str) -> Result<Vec<Income>, ApiError> {
    decode_body::<IncomeListing>(status, body).map(Vec::from)
}

/// Serialize a form payload as the JSON request body.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if serialization fails.
pub fn encode_payload(payload: &FormPayload) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

impl<A: ExpenseApi + ?Sized> ExpenseApi for &A {
    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ApiError> {
        (**self).list_expenses(filter).await
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Expense, ApiError> {
        (**self).get_expense(expense_id).await
    }

    async fn create_expense(&self, category_name: &str, payload: &FormPayload) -> Result<(), ApiError> {
        (**self).create_expense(category_name, payload).await
    }

    async fn update_expense(&self, expense_id: &str, payload: &FormPayload) -> Result<(), ApiError> {
        (**self).update_expense(expense_id, payload).await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), ApiError> {
        (**self).delete_expense(expense_id).await
    }

    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError> {
        (**self).list_incomes().await
    }

    async fn update_income(&self, payload: &FormPayload) -> Result<Income, ApiError> {
        (**self).update_income(payload).await
    }

    async fn monthly_summary(&self, year: &str) -> Result<ChartSummary, ApiError> {
        (**self).monthly_summary(year).await
    }

    async fn category_summary(&self) -> Result<ChartSummary, ApiError> {
        (**self).category_summary().await
    }
}

//! `reqwest` transport for the expense and income endpoints.

use std::time::Duration;

use records::api::{check_status, decode_body, decode_incomes, encode_payload};
use records::{endpoints, ApiError, ApiSession, ChartSummary, Expense, ExpenseApi, ExpenseFilter, FormPayload, Income};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::Method;

use crate::CliError;

/// `ExpenseApi` over a shared `reqwest::Client` with default auth headers.
pub struct ReqwestApi {
    client: reqwest::Client,
    session: ApiSession,
}

impl ReqwestApi {
    /// Build a client that sends the session token (if any) on every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// client cannot be built.
    pub fn new(session: ApiSession, timeout: Duration) -> Result<Self, CliError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(auth) = session.authorization() {
            let mut value = HeaderValue::from_str(&auth)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, session })
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
        let url = self.session.url(path);
        tracing::debug!(%method, %url, "request");
        let request = self.client.request(method, &url);
        let request = match body {
            Some(body) => request.header(CONTENT_TYPE, "application/json").body(body),
            None => request,
        };
        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(status, bytes = text.len(), "response");
        Ok((status, text))
    }
}

impl ExpenseApi for ReqwestApi {
    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ApiError> {
        let path = endpoints::expense_list(self.session.user_id(), filter);
        let (status, body) = self.send(Method::GET, &path, None).await?;
        decode_body(status, &body)
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Expense, ApiError> {
        let (status, body) = self.send(Method::GET, &endpoints::expense_detail(expense_id), None).await?;
        decode_body(status, &body)
    }

    async fn create_expense(&self, category_name: &str, payload: &FormPayload) -> Result<(), ApiError> {
        let path = endpoints::expense_create(self.session.user_id(), category_name);
        let (status, body) = self.send(Method::POST, &path, Some(encode_payload(payload)?)).await?;
        check_status(status, &body)
    }

    async fn update_expense(&self, expense_id: &str, payload: &FormPayload) -> Result<(), ApiError> {
        let path = endpoints::expense_detail(expense_id);
        let (status, body) = self.send(Method::PUT, &path, Some(encode_payload(payload)?)).await?;
        check_status(status, &body)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), ApiError> {
        let (status, body) = self.send(Method::DELETE, &endpoints::expense_delete(expense_id), None).await?;
        check_status(status, &body)
    }

    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError> {
        let (status, body) = self.send(Method::GET, endpoints::INCOMES, None).await?;
        decode_incomes(status, &body)
    }

    async fn update_income(&self, payload: &FormPayload) -> Result<Income, ApiError> {
        let path = endpoints::income_detail(self.session.user_id());
        let (status, body) = self.send(Method::PUT, &path, Some(encode_payload(payload)?)).await?;
        decode_body(status, &body)
    }

    async fn monthly_summary(&self, year: &str) -> Result<ChartSummary, ApiError> {
        let path = endpoints::monthly_summary(self.session.user_id(), year);
        let (status, body) = self.send(Method::GET, &path, None).await?;
        decode_body(status, &body)
    }

    async fn category_summary(&self) -> Result<ChartSummary, ApiError> {
        let path = endpoints::category_summary(self.session.user_id());
        let (status, body) = self.send(Method::GET, &path, None).await?;
        decode_body(status, &body)
    }
}

//! REST transport for the expense and income endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpApi`] still exists so controllers and pages type-check,
//! but every call returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Network failures map to [`ApiError::Transport`]; status and body decoding
//! go through `records::api` so the CLI and the browser classify responses
//! identically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::api::{check_status, decode_body, decode_incomes, encode_payload};
use records::{endpoints, ApiError, ApiSession, ChartSummary, Expense, ExpenseApi, ExpenseFilter, FormPayload, Income};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Header pairs for one request.
#[cfg(any(test, feature = "csr"))]
fn request_headers(session: &ApiSession, has_body: bool) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Accept", "application/json".to_owned())];
    if has_body {
        headers.push(("Content-Type", "application/json".to_owned()));
    }
    if let Some(auth) = session.authorization() {
        headers.push(("Authorization", auth));
    }
    headers
}

/// `ExpenseApi` over the browser's fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    session: ApiSession,
}

impl HttpApi {
    pub fn new(session: ApiSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &ApiSession {
        &self.session
    }

    /// Perform one request and return `(status, body text)`.
    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.session.url(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            for (name, value) in request_headers(&self.session, body.is_some()) {
                builder = builder.header(name, &value);
            }
            let response = match body {
                Some(body) => builder
                    .body(body)
                    .map_err(|e| ApiError::Transport(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            log::debug!("{method:?} {url} -> {status}");
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}

impl ExpenseApi for HttpApi {
    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ApiError> {
        let path = endpoints::expense_list(self.session.user_id(), filter);
        let (status, body) = self.send(Method::Get, &path, None).await?;
        decode_body(status, &body)
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Expense, ApiError> {
        let (status, body) = self.send(Method::Get, &endpoints::expense_detail(expense_id), None).await?;
        decode_body(status, &body)
    }

    async fn create_expense(&self, category_name: &str, payload: &FormPayload) -> Result<(), ApiError> {
        let path = endpoints::expense_create(self.session.user_id(), category_name);
        let (status, body) = self.send(Method::Post, &path, Some(encode_payload(payload)?)).await?;
        check_status(status, &body)
    }

    async fn update_expense(&self, expense_id: &str, payload: &FormPayload) -> Result<(), ApiError> {
        let path = endpoints::expense_detail(expense_id);
        let (status, body) = self.send(Method::Put, &path, Some(encode_payload(payload)?)).await?;
        check_status(status, &body)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), ApiError> {
        let (status, body) = self.send(Method::Delete, &endpoints::expense_delete(expense_id), None).await?;
        check_status(status, &body)
    }

    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError> {
        let (status, body) = self.send(Method::Get, endpoints::INCOMES, None).await?;
        decode_incomes(status, &body)
    }

    async fn update_income(&self, payload: &FormPayload) -> Result<Income, ApiError> {
        let path = endpoints::income_detail(self.session.user_id());
        let (status, body) = self.send(Method::Put, &path, Some(encode_payload(payload)?)).await?;
        decode_body(status, &body)
    }

    async fn monthly_summary(&self, year: &str) -> Result<ChartSummary, ApiError> {
        let path = endpoints::monthly_summary(self.session.user_id(), year);
        let (status, body) = self.send(Method::Get, &path, None).await?;
        decode_body(status, &body)
    }

    async fn category_summary(&self) -> Result<ChartSummary, ApiError> {
        let path = endpoints::category_summary(self.session.user_id());
        let (status, body) = self.send(Method::Get, &path, None).await?;
        decode_body(status, &body)
    }
}

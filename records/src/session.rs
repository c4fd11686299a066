//! Identity and credential context handed to every transport.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Who the requests are made for and where they go.
///
/// An empty `base_url` means same-origin requests (the browser case).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiSession {
    base_url: String,
    user_id: String,
    token: Option<String>,
}

impl ApiSession {
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url, user_id: user_id.into().trim().to_owned(), token: None }
    }

    /// Attach an API token; blank tokens are treated as absent.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute (or same-origin) URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `Authorization` header value for token authentication.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Token {token}"))
    }
}

//! Page configuration read from `<meta>` tags.
//!
//! The server-rendered template provides the user id, an optional API base
//! URL (empty means same-origin) and an optional API token.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use records::ApiSession;

use crate::util::dom;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing page setting `{0}`")]
    Missing(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub user_id: Option<String>,
    pub api_base: String,
    pub api_token: Option<String>,
}

impl PageConfig {
    /// Build from any name → value lookup; blank values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            user_id: read(dom::META_USER_ID),
            api_base: read(dom::META_API_BASE).unwrap_or_default(),
            api_token: read(dom::META_API_TOKEN),
        }
    }

    /// Read the current document's `<meta>` tags.
    pub fn from_document() -> Self {
        Self::from_lookup(dom::meta_content)
    }

    /// Session for the expense page, which needs a user id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when no user id is configured.
    pub fn expense_session(&self) -> Result<ApiSession, ConfigError> {
        let user_id = self.user_id.as_deref().ok_or(ConfigError::Missing(dom::META_USER_ID))?;
        Ok(ApiSession::new(self.api_base.as_str(), user_id).with_token(self.api_token.clone()))
    }

    /// Session for the income list, which only needs the token.
    #[must_use]
    pub fn income_session(&self) -> ApiSession {
        ApiSession::new(self.api_base.as_str(), self.user_id.clone().unwrap_or_default())
            .with_token(self.api_token.clone())
    }
}

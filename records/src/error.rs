//! Failure taxonomy shared by every transport.
//!
//! ERROR HANDLING
//! ==============
//! Transports map their native errors into [`ApiError`] so controllers can
//! surface one consistent message regardless of whether the request ran in
//! the browser or the terminal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Why an API call did not produce a usable result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, DNS, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx status without a readable error body.
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// Non-2xx status whose body explained the rejection.
    #[error("server rejected the request ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    /// A 2xx body that did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The request body could not be built.
    #[error("could not encode request body: {0}")]
    Encode(String),
    /// No HTTP transport in this build (native builds of the browser client).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response, keeping the server's explanation when it sent one.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match error_detail(body) {
            Some(detail) => Self::Rejected { status, detail },
            None => Self::Status { status },
        }
    }

    /// HTTP status for server-side failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } | Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a readable message out of a REST error body.
///
/// Understands `{"error": ...}`, `{"detail": ...}`, `{"non_field_errors": [...]}`
/// and per-field maps such as `{"amount": ["A valid number is required."]}`.
/// Non-JSON bodies (HTML error pages) yield `None`.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let detail = match &value {
        Value::Object(map) => {
            if let Some(message) = map.get("error").and_then(flatten_messages) {
                message
            } else if let Some(message) = map.get("detail").and_then(flatten_messages) {
                message
            } else if let Some(message) = map.get("non_field_errors").and_then(flatten_messages) {
                message
            } else {
                map.iter()
                    .filter_map(|(field, messages)| {
                        flatten_messages(messages).map(|text| format!("{field}: {text}"))
                    })
                    .collect::<Vec<_>>()
                    .join("; ")
            }
        }
        other => flatten_messages(other)?,
    };
    let detail = detail.trim();
    (!detail.is_empty()).then(|| detail.to_owned())
}

fn flatten_messages(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten_messages).collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        _ => None,
    }
}

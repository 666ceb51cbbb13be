//! Error types for the portfolio API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." Every other non-2xx response lands in `Http` with the raw body and
//! the server's `detail` message when the body carried one.
//!
//! Hooks never surface `ApiError` to the view layer directly. They collapse it
//! into one string with [`resolve_message`]: server detail first, then the
//! error's own message, then a caller-chosen fallback.

use serde::Deserialize;

/// Errors produced by the HTTP adapter and the resource façade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, reset).
    #[error("{0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u64 },

    /// The server returned 404.
    #[error("Request failed with status code 404")]
    NotFound { detail: Option<String> },

    /// The server returned a non-2xx status other than 404.
    #[error("Request failed with status code {status}")]
    Http {
        status: u16,
        detail: Option<String>,
        body: String,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// A failure raised on the calling side before or around the request.
    /// The message may be empty.
    #[error("{0}")]
    Client(String),
}

#[derive(Deserialize)]
struct DetailBody {
    detail: String,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        if status == 404 {
            return ApiError::NotFound { detail };
        }
        ApiError::Http {
            status,
            detail,
            body: body.to_string(),
        }
    }

    /// The `detail` message supplied by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { detail } | ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The error's own message, or `None` when it has nothing to say.
    pub fn message(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Extract `{"detail": "..."}` from an error body. Non-string details
/// (validation error arrays) and non-JSON bodies yield `None`.
fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<DetailBody>(body)
        .ok()
        .map(|b| b.detail)
        .filter(|d| !d.is_empty())
}

/// Collapse an error into the single string shown to the user.
pub fn resolve_message(err: &ApiError, fallback: &str) -> String {
    err.detail()
        .map(str::to_string)
        .or_else(|| err.message())
        .unwrap_or_else(|| fallback.to_string())
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform error for every API operation. Transport failures and
/// application-level failures both collapse into a single
/// human-readable message, so callers render them the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds the error for a non-2xx response. The backend reports
    /// failures as `{"detail": "..."}`; anything else falls back to a
    /// generic message carrying the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::new(parsed.detail),
            Err(_) => Self::new(format!("Request failed ({status})")),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request failed: {err}"))
    }
}

use anyhow::Error;
use serde::Deserialize;
use std::fmt;

/// Non-success HTTP status returned by the scraping service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub status: u16,
    pub message: String,
}

impl ServiceError {
    /// Build the error from a status code and the raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        Self {
            status,
            message: service_error_message(status, body),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Generic message used when the service gives no usable `detail`
pub fn status_message(status: u16) -> String {
    format!("HTTP error! status: {}", status)
}

/// Message for a non-success response
///
/// Uses the body's `detail` text when the body is a JSON object carrying a
/// non-empty string `detail`; otherwise falls back to the status code.
pub fn service_error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(text) if !text.is_empty() => Some(text),
            _ => None,
        });

    detail.unwrap_or_else(|| status_message(status))
}

/// Format error message for the error banner - show raw error details
pub fn format_error_message(error: &Error) -> String {
    if let Some(service_err) = error.downcast_ref::<ServiceError>() {
        return service_err.message.clone();
    }

    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

//! Error taxonomy for API calls.

use serde::Deserialize;
use thiserror::Error;

/// Rejection reason the server uses when an anonymous reader runs out of free
/// article views.
pub const PAYWALL_REASON: &str = "Maximum pageview limit reached";

/// Why an API call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("{}", .reason.as_deref().unwrap_or("request failed"))]
    Status { status: u16, reason: Option<String> },
    /// The request body could not be serialised.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// A success response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Error body shape used by the API: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// Build a status error, taking the reason from an `{error}` body when present.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let reason = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|e| !e.trim().is_empty());
        ApiError::Status { status, reason }
    }

    /// Server-provided reason, if the server sent one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ApiError::Status { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's reason, or `fallback` for every error without one.
    pub fn message_or(&self, fallback: &str) -> String {
        self.reason().unwrap_or(fallback).to_string()
    }

    pub fn is_paywall(&self) -> bool {
        self.reason() == Some(PAYWALL_REASON)
    }
}

//! Backend request errors

use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable response (connection refused, timeout, TLS, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error(
        "backend returned {status}: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    Rejected {
        status: u16,
        /// The body's `error` field, when the body carried one
        message: Option<String>,
    },

    /// Success status with a body that does not match the contract
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Server-supplied error message (`response.error`), if the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Server message, or `fallback` when none was supplied
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl From<ApiError> for labtrack_core::Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidBaseUrl { url, reason } => {
                labtrack_core::Error::invalid_base_url(url, reason)
            }
            other => labtrack_core::Error::backend(other.to_string()),
        }
    }
}

//! Request identity and failure summaries
//!
//! Every backend call is tagged with a [`RequestId`]. The component that
//! issued it remembers the id; a result carrying any other id is stale and
//! gets dropped.

use std::fmt;

use labtrack_api::ApiError;

/// Identifier of one in-flight backend request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Monotonic [`RequestId`] source
#[derive(Debug, Default)]
pub struct RequestIdGen {
    last: u64,
}

impl RequestIdGen {
    pub fn next_id(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

/// A failed request, reduced to what handlers show or log.
///
/// [`ApiError`] wraps transport errors that cannot be cloned, so messages
/// carry this summary instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    /// The backend's `error` field, when it sent one
    pub server_message: Option<String>,
    /// Full error text for logs
    pub detail: String,
}

impl RequestFailure {
    /// Failure with no server message
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            server_message: None,
            detail: detail.into(),
        }
    }

    /// Failure carrying the backend's `error` field
    pub fn server(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            detail: message.clone(),
            server_message: Some(message),
        }
    }

    /// Server message, or `fallback` when none was supplied
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

impl From<ApiError> for RequestFailure {
    fn from(err: ApiError) -> Self {
        Self {
            server_message: err.server_message().map(str::to_string),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

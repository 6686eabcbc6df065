//! Infrastructure errors shared by every labtrack crate
//!
//! Backend request failures have their own richer type in `labtrack-api`;
//! they collapse into [`Error::Backend`] or [`Error::InvalidBaseUrl`] when
//! they cross into startup code.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // --- Local I/O ---
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    // --- Terminal ---
    #[error("Terminal unavailable: {0}")]
    TerminalInit(String),

    #[error("Terminal: {message}")]
    Terminal { message: String },

    // --- Lab service ---
    #[error("Lab service request failed: {message}")]
    Backend { message: String },

    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    // --- Settings ---
    #[error("Settings file {} does not exist", path.display())]
    ConfigNotFound { path: PathBuf },

    // --- Message channel ---
    #[error("Could not deliver message: {message}")]
    ChannelSend { message: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Startup cannot proceed: no terminal, unusable backend URL, or an
    /// explicitly named settings file that is missing
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::InvalidBaseUrl { .. } | Error::ConfigNotFound { .. }
        )
    }
}

/// Log-and-convert helper for fallible calls
pub trait ResultExt<T> {
    /// Convert the error into [`Error`], logging it under `context`
    fn context(self, context: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!(error = %err, "{}", context);
            err
        })
    }
}

//! Error types for request validation.

use thiserror::Error;

/// Result type for request operations.
pub type RequestResult<T> = Result<T, RequestError>;

/// Errors raised while building a download request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The URL was empty or whitespace.
    #[error("URL is empty")]
    EmptyUrl,

    /// The URL is not syntactically valid.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The host is not on the platform allow-list.
    #[error("unsupported platform: {host}")]
    UnsupportedPlatform {
        /// Lowercased host of the URL.
        host: String,
    },

    /// Format string other than mp3/mp4.
    #[error("unknown format '{value}' (expected mp3 or mp4)")]
    UnknownFormat {
        /// The rejected format string.
        value: String,
    },
}

impl RequestError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::EmptyUrl => "REQUEST_001",
            RequestError::InvalidUrl { .. } => "REQUEST_002",
            RequestError::UnsupportedPlatform { .. } => "REQUEST_003",
            RequestError::UnknownFormat { .. } => "REQUEST_004",
        }
    }
}

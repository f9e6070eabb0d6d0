//! Error types for the conversion client.
//!
//! Every [`ConversionError`] means the same thing to callers: the external
//! service could not produce a payload for this one request. The variants only
//! exist so that logs and error messages can say why.

use thiserror::Error;

/// Errors that can occur while calling the external conversion service.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The configured endpoint is not a usable URL.
    #[error("Invalid conversion endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request did not complete within the configured timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("Upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body, truncated for display
        body: String,
    },

    /// Transport-level failure (connection refused, DNS, broken body stream).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl ConversionError {
    /// Maximum number of characters of an error body kept for display.
    pub const MAX_BODY_CHARS: usize = 200;

    /// Builds a [`ConversionError::Status`], truncating the body so a large
    /// upstream error page does not end up in logs verbatim.
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(Self::MAX_BODY_CHARS) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }

    /// Classifies a reqwest error, separating timeouts from other transport errors.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}

//! Core error types for FX Convert.
//!
//! Errors here are recoverable by construction: nothing in the core ends the
//! process on bad input or an unreachable upstream.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for conversion operations.
#[derive(Error, Debug)]
pub enum Error {
    /// User-supplied amount text is not a number and was not defaulted.
    #[error("Invalid amount: '{0}' is not a number")]
    InvalidAmount(String),

    /// The external conversion service could not serve a request.
    #[error("Conversion unavailable for {source_code} -> {target_code}: {reason}")]
    ConversionUnavailable {
        source_code: String,
        target_code: String,
        reason: String,
    },

    /// Invalid configuration value (for example an unknown parse mode).
    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

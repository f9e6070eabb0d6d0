//! FX Convert Core - currency registry, amount parsing and conversion aggregation.
//!
//! This crate holds the only real logic of the service: turning one user
//! request into either a single conversion or a fan-out over the main
//! currencies. The outbound HTTP call itself lives in `fxconvert-conversion`.

pub mod amount;
pub mod constants;
pub mod conversion;
pub mod currencies;
pub mod errors;

// Re-export the value types callers need alongside the services
pub use fxconvert_conversion::{Amount, ConversionPayload, ConversionRequest, Currency};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

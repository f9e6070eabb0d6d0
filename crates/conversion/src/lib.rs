//! FX Convert Conversion Client
//!
//! Thin client over the external currency-conversion HTTP API.
//!
//! # Overview
//!
//! The external service accepts exactly one source/target pair per request
//! and answers with a body that is passed through to the caller unparsed.
//! This crate models that contract:
//!
//! ```text
//! +--------------------+     +----------------------+     +-------------------+
//! | ConversionRequest  | --> | ConversionProvider   | --> | ConversionPayload |
//! | (from, to, amount) |     | (HttpConversionClient)|    | (raw bytes)       |
//! +--------------------+     +----------------------+     +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Currency`] - Opaque currency code with an optional description
//! - [`ConversionRequest`] - One source/target/amount triple
//! - [`ConversionPayload`] - Pass-through response body
//! - [`ConversionProvider`] - Trait implemented by conversion backends
//! - [`ConversionError`] - Why a single conversion call failed

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::ConversionError;
pub use models::{Amount, ConversionPayload, ConversionRequest, Currency};
pub use provider::http::{ClientConfig, HttpConversionClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use provider::ConversionProvider;

//! Conversion provider trait and implementations.

pub mod http;

use async_trait::async_trait;

use crate::errors::ConversionError;
use crate::models::{ConversionPayload, ConversionRequest};

/// A backend able to convert one amount from one currency to another.
///
/// Implementations issue exactly one outbound call per invocation and do not
/// retry. Callers that fan out over many targets rely on each call being
/// independent, so implementations must not hold shared mutable state across
/// calls.
#[async_trait]
pub trait ConversionProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Converts `request.amount` from `request.source` to `request.target`.
    ///
    /// Returns the service's response body unparsed on success.
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionPayload, ConversionError>;
}

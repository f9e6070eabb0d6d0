//! HTTP client for the external currency-conversion endpoint.
//!
//! The endpoint takes `amount`, `from` and `to` as query parameters and
//! answers with a body that is handed back untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::errors::ConversionError;
use crate::models::{ConversionPayload, ConversionRequest};
use crate::provider::ConversionProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "HAJANAONE";

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://www.hajanaone.com/currency-api.php";

/// Default per-call timeout. Each call is bounded so a batch cannot block forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`HttpConversionClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// [`ConversionProvider`] backed by the external HTTP API.
///
/// # Example
///
/// ```ignore
/// use fxconvert_conversion::{ClientConfig, HttpConversionClient};
///
/// let client = HttpConversionClient::new(ClientConfig::default())?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpConversionClient {
    client: Client,
    endpoint: Url,
}

impl HttpConversionClient {
    /// Builds a client for the given endpoint with an explicit request timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ConversionError> {
        let endpoint = Url::parse(config.endpoint.trim())
            .map_err(|e| ConversionError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConversionError::InvalidEndpoint(format!(
                "{}: unsupported scheme",
                config.endpoint
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ConversionError::Network)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self, request: &ConversionRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(request.query_params());
        url
    }
}

#[async_trait]
impl ConversionProvider for HttpConversionClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionPayload, ConversionError> {
        let url = self.request_url(request);
        tracing::debug!(
            "Converting {} {} -> {} via {}",
            request.amount,
            request.source,
            request.target,
            self.endpoint
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ConversionError::from_reqwest(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                "{} returned HTTP {} for {} -> {}",
                PROVIDER_ID,
                status.as_u16(),
                request.source,
                request.target
            );
            return Err(ConversionError::status(status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ConversionError::from_reqwest(PROVIDER_ID, e))?;

        Ok(ConversionPayload::new(bytes.to_vec()))
    }
}

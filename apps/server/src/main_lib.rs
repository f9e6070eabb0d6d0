use std::sync::Arc;

use crate::{config::Config, render::PageRenderer};
use fxconvert_conversion::{ClientConfig, ConversionProvider, HttpConversionClient};
use fxconvert_core::{
    amount::AmountParser,
    conversion::{ConversionService, ConversionServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub conversion_service: Arc<dyn ConversionServiceTrait>,
    pub amount_parser: AmountParser,
    pub renderer: Arc<PageRenderer>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = HttpConversionClient::new(ClientConfig {
        endpoint: config.conversion_api_url.clone(),
        timeout: config.conversion_timeout,
    })?;
    tracing::info!(
        "Conversion endpoint: {} (timeout {:?})",
        client.endpoint(),
        config.conversion_timeout
    );
    build_state_with_provider(config, Arc::new(client))
}

/// Wires the services around an already-built provider.
pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn ConversionProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let conversion_service: Arc<dyn ConversionServiceTrait> =
        Arc::new(ConversionService::new(provider));
    let renderer = Arc::new(PageRenderer::load(config.template_dir.as_deref())?);
    tracing::info!("Amount parse mode: {}", config.amount_mode);

    Ok(Arc::new(AppState {
        conversion_service,
        amount_parser: AmountParser::new(config.amount_mode),
        renderer,
    }))
}

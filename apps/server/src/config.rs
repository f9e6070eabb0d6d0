use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use fxconvert_conversion::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use fxconvert_core::amount::ParseMode;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub conversion_api_url: String,
    pub conversion_timeout: Duration,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
    pub amount_mode: ParseMode,
    pub template_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            conversion_api_url: DEFAULT_ENDPOINT.to_string(),
            conversion_timeout: DEFAULT_TIMEOUT,
            request_timeout: Duration::from_millis(30000),
            cors_allow: vec!["*".to_string()],
            amount_mode: ParseMode::default(),
            template_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("FX_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid FX_LISTEN_ADDR '{}'", addr))?,
            None => defaults.listen_addr,
        };
        let conversion_api_url = lookup("FX_CONVERSION_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.conversion_api_url);
        let conversion_timeout = lookup("FX_CONVERSION_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.conversion_timeout);
        let request_timeout = lookup("FX_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);
        let cors_allow = lookup("FX_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let amount_mode = match lookup("FX_AMOUNT_MODE") {
            Some(mode) => mode.parse::<ParseMode>()?,
            None => defaults.amount_mode,
        };
        let template_dir = lookup("FX_TEMPLATE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            conversion_api_url,
            conversion_timeout,
            request_timeout,
            cors_allow,
            amount_mode,
            template_dir,
        })
    }
}

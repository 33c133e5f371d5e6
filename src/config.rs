use anyhow::Result;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::schemas::AppState;
use crate::upstream::UpstreamClient;

/// Values given on the command line; they win over everything else.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
    pub static_dir: Option<String>,
}

/// Gateway configuration: defaults, then `TICKER_*` environment variables,
/// then CLI overrides.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GatewayConfig {
    pub bind_address: String,
    pub upstream_url: String,
    pub static_dir: String,
    pub request_timeout_secs: u64,
}

impl GatewayConfig {
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(Environment::with_prefix("TICKER"), overrides)
    }

    fn from_sources(env: Environment, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("upstream_url", "http://127.0.0.1:5000")?
            .set_default("static_dir", "workspace/frontend/dist")?
            .set_default("request_timeout_secs", 30)?
            .add_source(env.try_parsing(true))
            .set_override_option("bind_address", overrides.bind_address)?
            .set_override_option("upstream_url", overrides.upstream_url)?
            .set_override_option("static_dir", overrides.static_dir)?
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Initialize application state from the loaded configuration
pub fn initialize_app_state(config: &GatewayConfig) -> Result<AppState> {
    tracing::info!("Forwarding predictions to: {}", config.upstream_url);
    let upstream = UpstreamClient::new(&config.upstream_url, config.request_timeout())?;

    let static_dir = PathBuf::from(&config.static_dir);
    let static_dir = if static_dir.is_dir() {
        Some(static_dir)
    } else {
        tracing::warn!(
            "Static directory {} not found, the UI will not be served",
            config.static_dir
        );
        None
    };

    Ok(AppState {
        upstream: Arc::new(upstream),
        static_dir,
        request_timeout: config.request_timeout(),
    })
}

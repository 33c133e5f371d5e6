//! Client side of the external prediction service.
//!
//! The service owns the model and the market data; the gateway only relays
//! form-encoded requests to it and hands the JSON back.

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{HISTORICAL_DATA_PATH, PREDICT_PATH, Ticker};
use serde_json::Value;
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::{GatewayError, Result};

/// `/health` only asks whether the service answers; it should not wait as
/// long as a prediction may.
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Status and JSON body exactly as the service returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamReply {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

#[async_trait]
pub trait PredictionService: Send + Sync + Debug {
    async fn predict(&self, ticker: &Ticker) -> Result<UpstreamReply>;

    async fn historical_data(&self, ticker: &Ticker) -> Result<UpstreamReply>;

    /// True when the service answers HTTP at all.
    async fn is_reachable(&self) -> bool;
}

/// [`PredictionService`] over HTTP.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_form(&self, path: &str, ticker: &Ticker) -> Result<UpstreamReply> {
        let url = self.url(path);
        debug!("POST {} for ticker {}", url, ticker);

        let response = self
            .client
            .post(&url)
            .form(&ticker.form_fields())
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        // reqwest and axum sit on different `http` major versions.
        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| GatewayError::UpstreamDecode(e.to_string()))?;

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::UpstreamDecode(e.to_string()))?;

        debug!("POST {} answered {}", url, status);
        Ok(UpstreamReply::new(status, body))
    }
}

#[async_trait]
impl PredictionService for UpstreamClient {
    #[instrument(skip(self))]
    async fn predict(&self, ticker: &Ticker) -> Result<UpstreamReply> {
        self.post_form(PREDICT_PATH, ticker).await
    }

    #[instrument(skip(self))]
    async fn historical_data(&self, ticker: &Ticker) -> Result<UpstreamReply> {
        self.post_form(HISTORICAL_DATA_PATH, ticker).await
    }

    async fn is_reachable(&self) -> bool {
        self.client
            .get(&self.base_url)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
            .is_ok()
    }
}

use axum::{extract::FromRequest, Form};
use common::{ErrorResponse, HistoricalData, HistoricalSeries, PredictionResponse, Ticker};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use utoipa::{OpenApi, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::GatewayError;
use crate::upstream::PredictionService;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Prediction service the endpoints forward to
    pub upstream: Arc<dyn PredictionService>,
    /// Built frontend bundle, when one is available
    pub static_dir: Option<PathBuf>,
    /// Upper bound for handling one request
    pub request_timeout: Duration,
}

/// Form body of both POST endpoints. Bodies that are not form-encoded are
/// answered like a missing ticker.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema, FromRequest)]
#[from_request(via(Form), rejection(GatewayError))]
pub struct TickerForm {
    /// Instrument identifier, e.g. BTC-USD
    #[serde(default)]
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_ticker_symbol")
    )]
    pub ticker: String,
}

fn validate_ticker_symbol(ticker: &str) -> Result<(), ValidationError> {
    if ticker.chars().all(|c| c.is_alphanumeric() || c == '-') {
        Ok(())
    } else {
        Err(ValidationError::new("symbol"))
    }
}

impl TickerForm {
    /// Validated ticker, or the error the user should see.
    pub fn ticker(&self) -> Result<Ticker, GatewayError> {
        if let Err(errors) = self.validate() {
            let missing = errors
                .field_errors()
                .get("ticker")
                .is_some_and(|errs| errs.iter().any(|e| e.code == "required"));

            return Err(if missing {
                GatewayError::MissingTicker
            } else {
                GatewayError::InvalidTicker
            });
        }

        Ok(Ticker::new(self.ticker.clone()))
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the prediction service answers
    pub upstream: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::predict::predict,
        crate::handlers::historical::historical_data,
        crate::handlers::historical::historical_series,
    ),
    components(
        schemas(
            TickerForm,
            HealthResponse,
            ErrorResponse,
            PredictionResponse,
            HistoricalData,
            HistoricalSeries,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "Price prediction endpoints"),
        (name = "historical", description = "Historical closing price endpoints"),
    ),
    info(
        title = "Ticker Predictor API",
        description = "Gateway in front of the price prediction service",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

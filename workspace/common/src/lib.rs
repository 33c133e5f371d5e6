//! Common transport-layer types shared between the gateway and the frontend.
//! These structs mirror the prediction service's request/response payloads
//! so both sides deserialize the same shapes without duplicating them.

pub mod chart;
pub mod client;
pub mod gate;

pub use chart::PriceChart;
pub use client::{ClientError, PredictionApi, PredictionView, SubmissionOutcome, run_submission};
pub use gate::{SubmissionGate, SubmissionGuard};

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Name of the form field carrying the ticker on both endpoints.
pub const TICKER_FIELD: &str = "ticker";

/// Path of the prediction endpoint.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the historical closing price endpoint.
pub const HISTORICAL_DATA_PATH: &str = "/historical_data_1";

// ===================== Ticker =====================

/// User supplied instrument identifier. The browser sends it as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Form field pairs for an `application/x-www-form-urlencoded` body.
    pub fn form_fields(&self) -> [(&'static str, &str); 1] {
        [(TICKER_FIELD, self.as_str())]
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===================== Prediction =====================

/// Successful `/predict` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    pub predicted_price: f64,
}

/// Error body used by every endpoint on a non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Outcome of a `/predict` exchange, chosen by HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Predicted(PredictionResponse),
    Failed(ErrorResponse),
}

impl PredictionResult {
    pub fn predicted(price: f64) -> Self {
        Self::Predicted(PredictionResponse {
            predicted_price: price,
        })
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed(ErrorResponse::new(error))
    }

    /// Text written into the result area.
    pub fn display_text(&self) -> String {
        match self {
            Self::Predicted(response) => {
                format!("Predicted Price: {}", format_price(response.predicted_price))
            }
            Self::Failed(response) => format!("Error: {}", response.error),
        }
    }
}

/// Render a price the way a browser stringifies a number: shortest
/// round-trip digits, exponent form outside `[1e-6, 1e21)`.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

// ===================== Historical data =====================

/// `/historical_data_1` body. `dates` and `closing_prices` are parallel
/// arrays in chronological order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct HistoricalData {
    pub dates: Vec<String>,
    pub closing_prices: Vec<f64>,
}

impl HistoricalData {
    pub fn len(&self) -> usize {
        self.dates.len().min(self.closing_prices.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `GET /historical/{ticker}` body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct HistoricalSeries {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
}

impl From<HistoricalData> for HistoricalSeries {
    fn from(data: HistoricalData) -> Self {
        Self {
            dates: data.dates,
            prices: data.closing_prices,
        }
    }
}

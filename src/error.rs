use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::ErrorResponse;
use thiserror::Error;
use tracing::warn;

/// Errors the gateway answers for itself. The text is what the user sees
/// after `Error: `.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Ticker is required.")]
    MissingTicker,

    #[error("Invalid ticker symbol. Only alphabets and hyphens are allowed.")]
    InvalidTicker,

    #[error("Prediction service unavailable: {0}")]
    Upstream(String),

    #[error("Prediction service returned an unreadable response: {0}")]
    UpstreamDecode(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingTicker | Self::InvalidTicker => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::UpstreamDecode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<FormRejection> for GatewayError {
    fn from(rejection: FormRejection) -> Self {
        warn!(%rejection, "Request body is not a ticker form");
        Self::MissingTicker
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(%status, error = %self, "Request failed");
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Type alias for Result with GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;

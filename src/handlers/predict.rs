use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::schemas::{AppState, TickerForm};

/// Forward a prediction request
///
/// The service's status and JSON body are relayed unchanged.
#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    request_body(content = TickerForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Predicted next closing price", body = common::PredictionResponse),
        (status = 400, description = "Missing or invalid ticker", body = common::ErrorResponse),
        (status = 502, description = "Prediction service unavailable", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn predict(
    State(state): State<AppState>,
    form: TickerForm,
) -> Result<(StatusCode, Json<Value>)> {
    let ticker = form.ticker()?;
    let reply = state.upstream.predict(&ticker).await?;

    if reply.status.is_success() {
        info!(%ticker, "Prediction served");
    } else {
        warn!(%ticker, status = %reply.status, "Prediction service refused request");
    }

    Ok((reply.status, Json(reply.body)))
}

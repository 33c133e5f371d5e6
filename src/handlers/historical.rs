use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{HistoricalData, HistoricalSeries, Ticker};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{GatewayError, Result};
use crate::schemas::{AppState, TickerForm};

/// Forward a historical closing price request
#[utoipa::path(
    post,
    path = "/historical_data_1",
    tag = "historical",
    request_body(content = TickerForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Dates and closing prices, oldest first", body = common::HistoricalData),
        (status = 400, description = "Missing or invalid ticker", body = common::ErrorResponse),
        (status = 502, description = "Prediction service unavailable", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn historical_data(
    State(state): State<AppState>,
    form: TickerForm,
) -> Result<(StatusCode, Json<Value>)> {
    let ticker = form.ticker()?;
    let reply = state.upstream.historical_data(&ticker).await?;

    if !reply.status.is_success() {
        warn!(%ticker, status = %reply.status, "Historical data request refused");
    }

    Ok((reply.status, Json(reply.body)))
}

/// Historical closing prices as `{dates, prices}`
#[utoipa::path(
    get,
    path = "/historical/{ticker}",
    tag = "historical",
    params(
        ("ticker" = String, Path, description = "Instrument identifier"),
    ),
    responses(
        (status = 200, description = "Dates and prices, oldest first", body = common::HistoricalSeries),
        (status = 502, description = "Prediction service unavailable", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn historical_series(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>)> {
    let ticker = Ticker::new(ticker);
    let reply = state.upstream.historical_data(&ticker).await?;

    if !reply.status.is_success() {
        warn!(%ticker, status = %reply.status, "Historical data request refused");
        return Ok((reply.status, Json(reply.body)));
    }

    let data: HistoricalData = serde_json::from_value(reply.body)
        .map_err(|e| GatewayError::UpstreamDecode(e.to_string()))?;
    debug!(%ticker, points = data.len(), "Reshaping historical data");

    let series = serde_json::to_value(HistoricalSeries::from(data))
        .map_err(|e| GatewayError::UpstreamDecode(e.to_string()))?;

    Ok((StatusCode::OK, Json(series)))
}

//! Submission flow shared by every prediction front end.
//!
//! A submission asks for a prediction first. Only a successful prediction
//! leads to a single historical data request for the same ticker, whose
//! result is drawn as a [`PriceChart`].

use crate::{HistoricalData, PredictionResult, PriceChart, Ticker};
use async_trait::async_trait;
use thiserror::Error;

/// Transport level failures. A non-2xx `/predict` answer is not one of
/// these; it arrives as [`PredictionResult::Failed`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// The two server exchanges. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait PredictionApi {
    async fn predict(&self, ticker: &Ticker) -> Result<PredictionResult, ClientError>;

    async fn historical_data(&self, ticker: &Ticker) -> Result<HistoricalData, ClientError>;
}

/// Where results end up.
pub trait PredictionView {
    fn show_result(&self, text: &str);

    fn render_chart(&self, chart: &PriceChart);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Prediction shown and chart drawn.
    Charted { predicted_price: f64, points: usize },
    /// Server refused the prediction; the message was shown.
    Rejected(String),
}

/// Run one submission against `api`, writing into `view`.
pub async fn run_submission<A, V>(
    api: &A,
    view: &V,
    ticker: &Ticker,
) -> Result<SubmissionOutcome, ClientError>
where
    A: PredictionApi + ?Sized,
    V: PredictionView + ?Sized,
{
    log::debug!("Submitting prediction request for {}", ticker);

    let result = api.predict(ticker).await.map_err(|e| {
        log::error!("Prediction request for {} failed: {}", ticker, e);
        e
    })?;
    view.show_result(&result.display_text());

    match result {
        PredictionResult::Predicted(response) => {
            log::info!(
                "Predicted price for {}: {}",
                ticker,
                response.predicted_price
            );

            let data = api.historical_data(ticker).await.map_err(|e| {
                log::error!("Historical data request for {} failed: {}", ticker, e);
                e
            })?;

            let chart = PriceChart::from_historical(ticker, data);
            log::trace!("Rendering chart with {} points", chart.point_count());
            view.render_chart(&chart);

            Ok(SubmissionOutcome::Charted {
                predicted_price: response.predicted_price,
                points: chart.point_count(),
            })
        }
        PredictionResult::Failed(response) => {
            log::warn!("Prediction for {} rejected: {}", ticker, response.error);
            Ok(SubmissionOutcome::Rejected(response.error))
        }
    }
}

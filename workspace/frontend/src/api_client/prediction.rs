use common::{ClientError, ErrorResponse, PREDICT_PATH, PredictionResponse, PredictionResult, Ticker};
use crate::api_client;

/// POST the ticker to `/predict`. The HTTP status decides which body shape
/// is expected.
pub async fn predict(ticker: &Ticker) -> Result<PredictionResult, ClientError> {
    log::trace!("Requesting prediction for ticker: {}", ticker);
    let response = api_client::post_form(PREDICT_PATH, ticker).await?;

    if response.ok() {
        let body: PredictionResponse = api_client::decode(PREDICT_PATH, response).await?;
        log::info!("Prediction for {} received", ticker);
        Ok(PredictionResult::Predicted(body))
    } else {
        log::warn!("POST {} - Non-OK response: {}", PREDICT_PATH, response.status());
        let body: ErrorResponse = api_client::decode(PREDICT_PATH, response).await?;
        log::error!("POST {} - API error: {}", PREDICT_PATH, body.error);
        Ok(PredictionResult::Failed(body))
    }
}

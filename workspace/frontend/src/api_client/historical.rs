use common::{ClientError, HISTORICAL_DATA_PATH, HistoricalData, Ticker};
use crate::api_client;

/// POST the ticker to `/historical_data_1`. The body is decoded whatever the
/// status; an error body fails to decode and surfaces as `Decode`.
pub async fn fetch_historical_data(ticker: &Ticker) -> Result<HistoricalData, ClientError> {
    log::trace!("Fetching historical data for ticker: {}", ticker);
    let response = api_client::post_form(HISTORICAL_DATA_PATH, ticker).await?;
    let result = api_client::decode::<HistoricalData>(HISTORICAL_DATA_PATH, response).await;

    match &result {
        Ok(data) => log::info!("Received {} historical points for {}", data.len(), ticker),
        Err(e) => log::error!("Failed to fetch historical data: {}", e),
    }

    result
}

pub mod historical;
pub mod prediction;

use async_trait::async_trait;
use common::{ClientError, HistoricalData, PredictionApi, PredictionResult, Ticker};
use gloo_net::http::{Request, Response};
use web_sys::UrlSearchParams;
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common form-encoded POST. Returns the raw response so callers can branch
/// on the status before decoding.
pub async fn post_form(endpoint: &str, ticker: &Ticker) -> Result<Response, ClientError> {
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let params = UrlSearchParams::new().map_err(|e| {
        let error_msg = format!("{:?}", e);
        log::error!("POST {} - Failed to create form body: {}", endpoint, error_msg);
        ClientError::Request(error_msg)
    })?;
    for (name, value) in ticker.form_fields() {
        params.append(name, value);
    }

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(params)
        .map_err(|e| {
            log::error!("POST {} - Failed to build request: {}", endpoint, e);
            ClientError::Request(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            ClientError::Network(e.to_string())
        })?;

    log::trace!("POST {} - Response status {}", endpoint, response.status());
    Ok(response)
}

/// Parse a JSON body, logging decode failures against the endpoint.
pub async fn decode<T>(endpoint: &str, response: Response) -> Result<T, ClientError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    response.json::<T>().await.map_err(|e| {
        log::error!("POST {} - Failed to parse response: {}", endpoint, e);
        ClientError::Decode(e.to_string())
    })
}

/// [`PredictionApi`] backed by the browser's fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpPredictionApi;

#[async_trait(?Send)]
impl PredictionApi for HttpPredictionApi {
    async fn predict(&self, ticker: &Ticker) -> Result<PredictionResult, ClientError> {
        prediction::predict(ticker).await
    }

    async fn historical_data(&self, ticker: &Ticker) -> Result<HistoricalData, ClientError> {
        historical::fetch_historical_data(ticker).await
    }
}

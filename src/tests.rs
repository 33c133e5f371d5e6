#[cfg(test)]
mod integration_tests {
    use crate::router::create_router;
    use crate::schemas::{AppState, HealthResponse};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_with_timeout, StubService};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ErrorResponse, HistoricalSeries, PredictionResponse, Ticker};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;

    fn server_with(service: Arc<StubService>) -> TestServer {
        TestServer::new(setup_test_app(service)).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = server_with(Arc::new(StubService::predicting(1.0)));

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.upstream, "reachable");
    }

    #[tokio::test]
    async fn test_health_reports_unreachable_upstream() {
        let server = server_with(Arc::new(StubService::unreachable()));

        let body: HealthResponse = server.get("/health").await.json();

        assert_eq!(body.status, "healthy");
        assert_eq!(body.upstream, "unreachable");
    }

    #[tokio::test]
    async fn test_predict_relays_price() {
        let service = Arc::new(StubService::predicting(50000.0));
        let server = server_with(service.clone());

        let response = server.post("/predict").form(&[("ticker", "BTC")]).await;

        response.assert_status(StatusCode::OK);
        let body: PredictionResponse = response.json();
        assert_eq!(body.predicted_price, 50000.0);
        assert_eq!(service.predict_calls(), vec![Ticker::from("BTC")]);
        assert!(service.history_calls().is_empty());
    }

    #[tokio::test]
    async fn test_predict_relays_upstream_refusal() {
        let service = Arc::new(StubService::refusing(
            StatusCode::BAD_REQUEST,
            json!({"error": "Not enough data to make a prediction."}),
        ));
        let server = server_with(service);

        let response = server.post("/predict").form(&[("ticker", "NEWCOIN")]).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Not enough data to make a prediction.");
    }

    #[tokio::test]
    async fn test_predict_relays_upstream_server_error() {
        let service = Arc::new(StubService::refusing(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "model file missing"}),
        ));
        let server = server_with(service);

        let response = server.post("/predict").form(&[("ticker", "BTC")]).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "model file missing");
    }

    #[tokio::test]
    async fn test_predict_requires_ticker() {
        let service = Arc::new(StubService::predicting(1.0));
        let server = server_with(service.clone());

        let response = server.post("/predict").form(&[("ticker", "")]).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Ticker is required.");
        assert!(service.predict_calls().is_empty());
    }

    #[tokio::test]
    async fn test_predict_missing_field_is_required_error() {
        let server = server_with(Arc::new(StubService::predicting(1.0)));

        let response = server.post("/predict").form(&[("symbol", "BTC")]).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Ticker is required.");
    }

    #[tokio::test]
    async fn test_predict_json_body_is_required_error() {
        let service = Arc::new(StubService::predicting(1.0));
        let server = server_with(service.clone());

        let response = server.post("/predict").json(&json!({"ticker": "BTC"})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Ticker is required.");
        assert!(service.predict_calls().is_empty());
    }

    #[tokio::test]
    async fn test_predict_empty_body_is_required_error() {
        let server = server_with(Arc::new(StubService::predicting(1.0)));

        let response = server.post("/predict").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Ticker is required.");
    }

    #[tokio::test]
    async fn test_historical_data_json_body_is_required_error() {
        let service = Arc::new(StubService::predicting(1.0));
        let server = server_with(service.clone());

        let response = server
            .post("/historical_data_1")
            .json(&json!({"ticker": "BTC"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Ticker is required.");
        assert!(service.history_calls().is_empty());
    }

    #[tokio::test]
    async fn test_slow_upstream_hits_request_timeout() {
        let service = Arc::new(StubService::predicting(1.0).slow(Duration::from_millis(500)));
        let app = setup_test_app_with_timeout(service, Duration::from_millis(50));
        let server = TestServer::new(app).unwrap();

        let response = server.post("/predict").form(&[("ticker", "BTC")]).await;

        response.assert_status(StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_slow_upstream_within_request_timeout() {
        let service = Arc::new(StubService::predicting(7.0).slow(Duration::from_millis(50)));
        let app = setup_test_app_with_timeout(service, Duration::from_secs(5));
        let server = TestServer::new(app).unwrap();

        let response = server.post("/predict").form(&[("ticker", "BTC")]).await;

        response.assert_status(StatusCode::OK);
        let body: PredictionResponse = response.json();
        assert_eq!(body.predicted_price, 7.0);
    }

    #[tokio::test]
    async fn test_predict_rejects_invalid_symbol() {
        let service = Arc::new(StubService::predicting(1.0));
        let server = server_with(service.clone());

        let response = server.post("/predict").form(&[("ticker", "BTC/USD")]).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(
            body.error,
            "Invalid ticker symbol. Only alphabets and hyphens are allowed."
        );
        assert!(service.predict_calls().is_empty());
    }

    #[tokio::test]
    async fn test_predict_with_unreachable_upstream_is_bad_gateway() {
        let server = server_with(Arc::new(StubService::unreachable()));

        let response = server.post("/predict").form(&[("ticker", "BTC")]).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = response.json();
        assert!(body.error.starts_with("Prediction service unavailable"));
    }

    #[tokio::test]
    async fn test_historical_data_relays_parallel_arrays() {
        let service = Arc::new(StubService::predicting(1.0));
        let server = server_with(service.clone());

        let response = server
            .post("/historical_data_1")
            .form(&[("ticker", "ETH-USD")])
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["dates"], json!(["2024-01-01", "2024-01-02"]));
        assert_eq!(body["closing_prices"], json!([1, 2]));
        assert_eq!(service.history_calls(), vec![Ticker::from("ETH-USD")]);
    }

    #[tokio::test]
    async fn test_historical_series_renames_prices() {
        let service = Arc::new(StubService::predicting(1.0));
        let server = server_with(service.clone());

        let response = server.get("/historical/BTC-USD").await;

        response.assert_status(StatusCode::OK);
        let body: HistoricalSeries = response.json();
        assert_eq!(body.dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(body.prices, vec![1.0, 2.0]);
        assert_eq!(service.history_calls(), vec![Ticker::from("BTC-USD")]);
    }

    #[tokio::test]
    async fn test_historical_series_with_malformed_upstream_body() {
        let mut stub = StubService::predicting(1.0);
        stub.history = Ok(crate::upstream::UpstreamReply::new(
            StatusCode::OK,
            json!({"dates": "not-a-list"}),
        ));
        let server = server_with(Arc::new(stub));

        let response = server.get("/historical/BTC").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_historical_series_relays_upstream_error() {
        let service = Arc::new(StubService::refusing(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "download failed"}),
        ));
        let server = server_with(service);

        let response = server.get("/historical/BTC").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "download failed");
    }

    #[tokio::test]
    async fn test_static_bundle_is_served_with_index_fallback() {
        let dir = std::env::temp_dir().join(format!("ticker-predictor-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<div id=\"app\"></div>").unwrap();

        let state = AppState {
            upstream: Arc::new(StubService::predicting(1.0)),
            static_dir: Some(dir.clone()),
            request_timeout: Duration::from_secs(30),
        };
        let server = TestServer::new(create_router(state)).unwrap();

        let root = server.get("/").await;
        root.assert_status(StatusCode::OK);
        assert!(root.text().contains("id=\"app\""));

        let unknown = server.get("/some/client/route").await;
        unknown.assert_status(StatusCode::OK);
        assert!(unknown.text().contains("id=\"app\""));

        // API routes still win over the bundle
        server.get("/health").await.assert_status(StatusCode::OK);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_swagger_document_is_served() {
        let server = server_with(Arc::new(StubService::predicting(1.0)));

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert!(body["paths"].get("/predict").is_some());
    }
}

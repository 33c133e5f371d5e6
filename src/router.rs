use crate::handlers::{
    health::health_check,
    historical::{historical_data, historical_series},
    predict::predict,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use common::{HISTORICAL_DATA_PATH, PREDICT_PATH};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;
    let mut router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Endpoints used by the UI
        .route(PREDICT_PATH, post(predict))
        .route(HISTORICAL_DATA_PATH, post(historical_data))
        .route("/historical/:ticker", get(historical_series))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Everything else is the frontend bundle
    if let Some(static_dir) = &state.static_dir {
        let index = ServeFile::new(static_dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(static_dir).fallback(index));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

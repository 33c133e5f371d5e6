#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for schema in [
            "ErrorResponse",
            "HealthResponse",
            "TickerForm",
            "PredictionResponse",
            "HistoricalData",
            "HistoricalSeries",
        ] {
            assert!(components.schemas.contains_key(schema), "missing schema {}", schema);
        }

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_openapi_documents_every_route() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/predict"));
        assert!(paths.contains_key("/historical_data_1"));
        assert!(paths.contains_key("/historical/{ticker}"));
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = error_response_schema {
            assert!(obj.properties.contains_key("error"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }
}

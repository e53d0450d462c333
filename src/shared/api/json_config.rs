use crate::shared::api::ApiResponse;
use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

/// Malformed or mistyped JSON bodies become `400 VALIDATION_ERROR` envelopes.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().limit(64 * 1024).error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
            .into()
    })
}

/// Unparseable query strings, e.g. an unknown `status` filter.
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
            .into()
    })
}

/// Path segments that don't parse, e.g. a malformed id.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
            .into()
    })
}

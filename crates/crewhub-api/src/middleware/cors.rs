//! CORS layer construction from configuration.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crewhub_core::config::app::CorsConfig;

/// Build a CORS layer from the configured origins, methods, and headers.
///
/// `"*"` in a list switches that dimension to allow-any.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods = AllowMethods::list(
        config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse::<Method>().ok()),
    );

    let headers = if config.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(
            config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse::<HeaderName>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}

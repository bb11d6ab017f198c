//! HTTP API route definitions and the CORS policy layer.

use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{AppError, Result};

use super::handlers::{health, root};

/// Create the API router with CORS and request tracing applied.
pub fn create_router(config: &Config) -> Result<Router> {
    let cors = cors_layer(config)?;

    Ok(Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Build the CORS layer from configuration.
///
/// tower-http refuses the literal wildcard + allow-credentials combination
/// (it panics at layer construction), so when credentials are enabled the
/// layer mirrors the request's origin, methods, and headers instead. That
/// grants every caller its own origin, preserving the "allow everything
/// during development" intent without the forbidden `*` + credentials pair.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin = if config.allow_any_origin() {
        if config.cors_allow_credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::any()
        }
    } else {
        let origins = config
            .origin_list()
            .into_iter()
            .map(|o| {
                HeaderValue::from_str(&o).map_err(|e| AppError::InvalidOrigin {
                    origin: o.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    let (methods, headers) = if config.cors_allow_credentials {
        (AllowMethods::mirror_request(), AllowHeaders::mirror_request())
    } else {
        (AllowMethods::any(), AllowHeaders::any())
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.cors_allow_credentials))
}

//! HTTP API handlers.
//!
//! Both handlers return fixed payloads. The response structs use
//! `&'static str` fields so key order and content are fixed at compile time
//! and repeated requests serialize to byte-identical bodies.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Greeting message returned by the root endpoint.
pub const ROOT_MESSAGE: &str = "Hello from FastAPI Backend!";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "workout-bird-backend";

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Fixed greeting message.
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Root handler - always returns 200 with the fixed greeting.
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}

/// Health check handler - always returns 200.
///
/// Liveness only: no database ping or downstream call, so this reports
/// process-is-running, never deeper service health.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

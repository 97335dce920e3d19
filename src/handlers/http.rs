//! HTTP handlers: health.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::services::Gatekeeper;

/// Shared application state for HTTP/WS.
#[derive(Clone)]
pub struct AppState {
    pub gatekeeper: Gatekeeper,
}

impl AppState {
    pub fn new(gatekeeper: Gatekeeper) -> Self {
        Self { gatekeeper }
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "notification-gate" })),
    )
}

//! Operational HTTP endpoints.
//!
//! - `/`       : service name, version and endpoint list
//! - `/health` : liveness plus whether any keys are configured

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::app_state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let key_count = state.registry().len();
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "keys_configured": key_count > 0,
            "key_count": key_count,
            "version": state.version(),
        })),
    )
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "service": state.cfg().service.name,
            "version": state.version(),
            "endpoints": {
                "/validate": "POST/GET - Validate Bearer token for the tenant header",
                "/health": "GET - Health check",
                "/": "GET - Service information",
            }
        })),
    )
}

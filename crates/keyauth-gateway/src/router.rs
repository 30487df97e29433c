//! Axum router wiring.
//!
//! - `/`          : service information
//! - `/health`    : health check with key registry summary
//! - `/validate`  : token/tenant validation (GET or POST)

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::index))
        .route("/health", get(ops::health))
        .route(
            "/validate",
            get(transport::validate::validate).post(transport::validate::validate),
        )
        .with_state(state)
}

//! `/validate` handler.
//!
//! Reads `Authorization` and `tenant`, asks the engine for a verdict and maps
//! it to a status and JSON body. The raw token is never logged.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use keyauth_core::{authorize, Verdict};

use crate::app_state::AppState;
use crate::transport::headers;

pub const AUTHORIZED_SUBJECT: &str = "authorized-user";

/// Status and body for a verdict.
pub fn render(verdict: &Verdict<'_>) -> (StatusCode, Json<Value>) {
    match verdict {
        Verdict::ServiceMisconfigured => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "service misconfigured" })),
        ),
        Verdict::TenantHeaderMissing => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "tenant header required" })),
        ),
        Verdict::TokenUnauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        ),
        Verdict::TenantUnauthorized { .. } => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "unauthorized for this tenant" })),
        ),
        Verdict::Authorized { tenant, allowed } => (
            StatusCode::OK,
            Json(json!({
                "subject": AUTHORIZED_SUBJECT,
                "extra": {
                    "tenant": tenant,
                    "allowed_tenants": allowed,
                }
            })),
        ),
    }
}

pub async fn validate(State(state): State<AppState>, req_headers: HeaderMap) -> Response {
    if state.cfg().logging.log_headers {
        headers::log_headers(&req_headers);
    }

    let tenant = headers::tenant(&req_headers);
    let verdict = authorize(
        state.registry(),
        headers::authorization(&req_headers),
        tenant,
    );

    match &verdict {
        Verdict::ServiceMisconfigured => {
            tracing::error!(outcome = verdict.outcome(), "no valid keys configured");
        }
        Verdict::TenantUnauthorized { allowed } => {
            tracing::info!(
                outcome = verdict.outcome(),
                tenant = tenant.unwrap_or_default(),
                allowed = ?allowed.sorted(),
                "token not scoped to tenant"
            );
        }
        _ => {
            tracing::info!(
                outcome = verdict.outcome(),
                tenant = tenant.unwrap_or_default(),
                "validation"
            );
        }
    }

    render(&verdict).into_response()
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::AppState;
use contracts::HealthReport;

/// GET /api/health
///
/// Probes the upstream `/api/tags` endpoint. A reply with an error status
/// and an unreachable server both map to 503, with distinct messages.
pub async fn check(State(state): State<AppState>) -> impl IntoResponse {
    match state.ollama.ping().await {
        Ok(true) => (StatusCode::OK, Json(HealthReport::connected())),
        Ok(false) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthReport::degraded()),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthReport::unreachable(e.to_string())),
        ),
    }
}

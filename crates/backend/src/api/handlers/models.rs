use axum::{extract::State, http::StatusCode, Json};

use crate::AppState;
use contracts::ApiError;

/// GET /api/models
///
/// Relays the upstream `/api/tags` body untouched so the client sees
/// exactly what Ollama reports.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    match state.ollama.list_tags().await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!("Failed to fetch model list: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Impossible de récupérer les modèles",
                    e.to_string(),
                )),
            ))
        }
    }
}

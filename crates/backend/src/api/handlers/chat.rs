use axum::{extract::State, http::StatusCode, Json};

use crate::AppState;
use contracts::{ApiError, ChatRequest};

/// POST /api/chat
///
/// Validates the request, then forwards it to `/api/generate` with
/// streaming disabled. The upstream body comes back untouched.
pub async fn send(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    if !req.is_valid() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Le modèle et le prompt sont requis")),
        ));
    }

    match state.ollama.generate(&req.model, &req.prompt).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!("Failed to generate completion: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Erreur lors de la communication avec Ollama",
                    e.to_string(),
                )),
            ))
        }
    }
}

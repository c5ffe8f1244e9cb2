pub mod api;
pub mod routes;
pub mod shared;

use shared::ollama::OllamaClient;

/// State shared by every route handler.
#[derive(Clone)]
pub struct AppState {
    pub ollama: OllamaClient,
}

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
///
/// Three outcomes: Ollama answered with a success status, Ollama answered
/// with an error status, Ollama could not be reached at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub ollama: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HealthReport {
    /// Ollama replied 2xx to `/api/tags`.
    pub fn connected() -> Self {
        Self {
            status: "ok".into(),
            ollama: "connected".into(),
            message: "Ollama est accessible".into(),
            details: None,
        }
    }

    /// Ollama replied, but with an error status.
    pub fn degraded() -> Self {
        Self {
            status: "error".into(),
            ollama: "disconnected".into(),
            message: "Ollama ne répond pas correctement".into(),
            details: None,
        }
    }

    /// Ollama could not be reached at all.
    pub fn unreachable(details: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            ollama: "disconnected".into(),
            message: "Impossible de se connecter à Ollama".into(),
            details: Some(details.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat` as the web client sends it.
///
/// Both fields default to empty so that an absent field and an empty one
/// fail validation identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub prompt: String,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    /// A request is usable only when both fields carry non-blank text.
    pub fn is_valid(&self) -> bool {
        !self.model.trim().is_empty() && !self.prompt.trim().is_empty()
    }
}

/// The slice of an Ollama `/api/generate` reply the client reads.
///
/// The backend forwards the upstream body untouched, so anything beyond
/// these two fields is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReply {
    pub response: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_deserialize_as_empty() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.model, "");
        assert_eq!(req.prompt, "");
        assert!(!req.is_valid());
    }

    #[test]
    fn test_blank_fields_are_invalid() {
        assert!(!ChatRequest::new("", "Bonjour").is_valid());
        assert!(!ChatRequest::new("qwen2.5-coder:7b", "   ").is_valid());
        assert!(ChatRequest::new("qwen2.5-coder:7b", "Bonjour").is_valid());
    }

    #[test]
    fn test_generate_reply_tolerates_extra_fields() {
        let reply: GenerateReply = serde_json::from_str(
            r#"{"model":"m","response":"Salut","done":true,"context":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(reply.response.as_deref(), Some("Salut"));
        assert!(reply.error.is_none());
    }
}

use serde::{Deserialize, Serialize};

/// One installed model as listed by Ollama `/api/tags`.
///
/// Ollama sends more (digest, details, timestamps); the interface only
/// needs the name and the size on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaModel {
    pub name: String,
    pub size: Option<u64>,
}

/// Body of `GET /api/models`, mirroring the upstream `/api/tags` shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<OllamaModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_body_parses_with_extra_fields() {
        let body = r#"{
            "models": [
                { "name": "qwen2.5-coder:7b", "size": 4700000000, "digest": "abc" },
                { "name": "deepseek-coder:latest" }
            ]
        }"#;
        let list: ModelList = serde_json::from_str(body).unwrap();
        assert_eq!(list.models.len(), 2);
        assert_eq!(list.models[0].name, "qwen2.5-coder:7b");
        assert_eq!(list.models[0].size, Some(4_700_000_000));
        assert_eq!(list.models[1].size, None);
    }

    #[test]
    fn test_missing_models_means_empty_list() {
        let list: ModelList = serde_json::from_str("{}").unwrap();
        assert!(list.models.is_empty());
    }
}

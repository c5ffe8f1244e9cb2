use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// TCP connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout for tag listing and health probes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Total request timeout for completions. A cold model can spend minutes
/// loading into memory before the first token is produced.
const GENERATE_TIMEOUT: Duration = Duration::from_secs(300);

/// Errors from the Ollama HTTP API.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Ollama answered with a non-success status.
    #[error("Ollama API error: {status}")]
    Status { status: u16 },
    /// Ollama could not be reached (connection refused, timeout, DNS).
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    /// Ollama answered 2xx with a body that is not JSON.
    #[error("invalid JSON from Ollama: {0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP client for the local Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    /// Client for tag listing and health probes (short timeout).
    http: reqwest::Client,
    /// Client for completions (long timeout).
    http_generate: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        let http_generate = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(GENERATE_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http,
            http_generate,
        }
    }

    /// Fetch the installed models via GET /api/tags.
    ///
    /// The body is returned as raw JSON so callers can forward it without
    /// reshaping.
    pub async fn list_tags(&self) -> Result<Value, OllamaError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Ollama /api/tags returned {}", status);
            return Err(OllamaError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Request a completion via POST /api/generate with streaming disabled.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<Value, OllamaError> {
        let url = format!("{}/api/generate", self.base_url);

        let request_body = serde_json::json!({
            "model": model,
            "prompt": prompt,
            "stream": false,
        });

        let response = self.http_generate.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Ollama /api/generate failed with status {}: {}", status, body);
            return Err(OllamaError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Probe /api/tags and report whether Ollama answered at all.
    ///
    /// `Ok(true)` means a success status, `Ok(false)` an error status, and
    /// `Err` that the server could not be reached.
    pub async fn ping(&self) -> Result<bool, OllamaError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.http.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_carries_bare_code() {
        let err = OllamaError::Status { status: 500 };
        assert_eq!(err.to_string(), "Ollama API error: 500");

        let err = OllamaError::Status { status: 404 };
        assert_eq!(err.to_string(), "Ollama API error: 404");
    }
}

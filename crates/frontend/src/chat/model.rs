//! Chat page - API functions

use contracts::{ChatRequest, GenerateReply, HealthReport, ModelList};
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// Fetch the backend and Ollama health state
pub async fn fetch_health() -> Result<HealthReport, String> {
    let url = format!("{}/health", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    // A 503 still carries a health report, so the body is parsed whatever
    // the status code says.
    let data: HealthReport = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch the list of installed models
pub async fn fetch_models() -> Result<ModelList, String> {
    let url = format!("{}/models", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ModelList = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Send a prompt to the selected model and wait for the full completion
pub async fn send_prompt(model: &str, prompt: &str) -> Result<GenerateReply, String> {
    let url = format!("{}/chat", API_BASE);
    let body = ChatRequest::new(model, prompt);

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: GenerateReply = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

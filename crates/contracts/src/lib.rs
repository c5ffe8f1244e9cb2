//! Wire types shared by the backend proxy and the web client.

pub mod chat;
pub mod error;
pub mod health;
pub mod models;

pub use chat::{ChatRequest, GenerateReply};
pub use error::ApiError;
pub use health::HealthReport;
pub use models::{ModelList, OllamaModel};

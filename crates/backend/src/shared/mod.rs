pub mod config;
pub mod ollama;

use crate::llm::ChatMessage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

use super::types::{ChatRequest, ChatResponse, ErrorResponse, TemplateRequest};
use crate::assistant::{Assistant, TemplateBundle};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const UNEXPECTED_REPLY_MESSAGE: &str = "Unexpected response from the model.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

/// Unreadable bodies get the same envelope as a failed completion call.
fn read_body<T>(route: &str, payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(request)| request).map_err(|rejection| {
        error!("Rejected {} request body: {}", route, rejection.body_text());
        error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    })
}

pub async fn template(
    State(state): State<AppState>,
    payload: Result<Json<TemplateRequest>, JsonRejection>,
) -> Result<Json<TemplateBundle>, ApiError> {
    let request = read_body("template", payload)?;
    info!("Received template request ({} chars)", request.prompt.len());

    match state.assistant.template(&request.prompt).await {
        Ok(bundle) => Ok(Json(bundle)),
        Err(e) if e.is_client_facing() => {
            warn!("Could not classify project: {}", e);
            Err(error_response(StatusCode::BAD_REQUEST, UNEXPECTED_REPLY_MESSAGE))
        }
        Err(e) => {
            error!("Error generating completion: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
            ))
        }
    }
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = read_body("chat", payload)?;
    info!("Received chat request with {} messages", request.messages.len());

    match state.assistant.chat(request.messages).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(e) => {
            error!("Error generating chat response: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
            ))
        }
    }
}

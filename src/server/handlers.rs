use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::AppState;
use super::error::ApiError;

pub const NO_MESSAGE: &str = "No message provided";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "rejected chat body");
            return Err(ApiError::BadRequest(NO_MESSAGE.to_string()));
        }
    };

    let message = request.message.unwrap_or_default().trim().to_string();
    if message.is_empty() {
        return Err(ApiError::BadRequest(NO_MESSAGE.to_string()));
    }

    let dispatcher = state.dispatcher.clone();
    let response = tokio::spawn(async move { dispatcher.respond(&message).await })
        .await
        .map_err(|e| {
            error!(error = %e, "dispatch task failed");
            ApiError::Internal("Internal server error".to_string())
        })?;

    Ok(Json(ChatResponse { response }))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

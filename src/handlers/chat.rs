use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::ai::ChatMessage;
use crate::services::chat;
use crate::state::AppState;

fn default_context() -> String {
    "IDD care and support".to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_context")]
    pub context: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    tracing::info!(
        turns = payload.conversation_history.len(),
        "chat message received"
    );

    let reply = chat::respond(
        state.llm.as_deref(),
        &payload.message,
        &payload.context,
        &payload.conversation_history,
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "chat completion failed");
        AppError::Ai("Failed to process chat request".to_string())
    })?;

    Ok(Json(ChatResponse { reply }))
}

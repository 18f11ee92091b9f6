// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{
        classifier::{Route, classify},
        prompt::synthesize,
    },
    state::SharedState,
};

/// Routes an inbound message to a generic chat turn or an itinerary turn,
/// then wraps whatever the gateway produced. Itinerary output is passed
/// through as opaque text, never parsed.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err(AppError::BadRequest("message required".to_string()));
    }

    let route = classify(message);
    tracing::info!(route = ?route, "chat message classified");

    let content = match route {
        Route::Itinerary => state.gateway.generate(&synthesize(message)).await?,
        Route::Chat => state.gateway.generate(message).await?,
    };

    Ok(Json(ChatResponse { kind: route, content }))
}

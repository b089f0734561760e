//! Axum route handlers for the chat assistant.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{MarketSnapshot, UserProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// `null` while the dashboard is still loading.
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub market_data: Option<MarketSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/v1/chat
///
/// Answers a dashboard chat message. Backend failures degrade to canned text,
/// so the only error is a blank message.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;

    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let profile = request.profile.unwrap_or_default();
    let market = request.market_data.unwrap_or_default();
    let response = state.chat.resolve(&request.message, &profile, &market).await;

    Ok(Json(ChatResponse { response }))
}

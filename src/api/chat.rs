//! Chat assistant endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::chat::{ChatTurn, LanguageInfo, SendMessage},
    AppState,
};

/// Send a message to the assistant
#[utoipa::path(
    post,
    path = "/chat/messages",
    tag = "chat",
    request_body = SendMessage,
    responses(
        (status = 201, description = "Recorded exchange with the reply", body = ChatTurn),
        (status = 400, description = "Empty or oversized message", body = crate::error::ErrorResponse),
        (status = 500, description = "Reply table is incomplete", body = crate::error::ErrorResponse)
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessage>,
) -> AppResult<(StatusCode, Json<ChatTurn>)> {
    let turn = state.services.chatbot.send_message(request).await?;
    Ok((StatusCode::CREATED, Json(turn)))
}

/// Get the conversation history, oldest first
#[utoipa::path(
    get,
    path = "/chat/history",
    tag = "chat",
    responses(
        (status = 200, description = "Conversation history", body = Vec<ChatTurn>)
    )
)]
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<ChatTurn>> {
    Json(state.services.chatbot.history().await)
}

/// Clear the conversation history
#[utoipa::path(
    delete,
    path = "/chat/history",
    tag = "chat",
    responses(
        (status = 204, description = "History cleared")
    )
)]
pub async fn clear_history(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.services.chatbot.clear_history().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List supported languages
#[utoipa::path(
    get,
    path = "/chat/languages",
    tag = "chat",
    responses(
        (status = 200, description = "Supported languages", body = Vec<LanguageInfo>)
    )
)]
pub async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageInfo>> {
    Json(state.services.chatbot.languages())
}

use super::{json_body, trimmed};
use crate::entity::{Chat, ChatBoard, ChatMessage, Entity, EntityError};
use crate::server::{ApiError, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

const CHAT_NOT_FOUND: &str = "chat not found";

/// `POST /api/chats` with `{ title }`. Answers with the board summary.
pub async fn create_chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<Chat>, ApiError> {
    let body = json_body(payload)?;
    let title = trimmed(&body, "title").ok_or_else(|| ApiError::bad_request("title required"))?;
    let board = ChatBoard {
        id: ChatBoard::new_id(),
        title: title.to_string(),
        messages: Vec::new(),
    };
    let created = state.entities.chats.create(board).await?;
    Ok(ApiResponse::ok(created.summary()))
}

/// `GET /api/chats/:id/messages`
pub async fn list_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<ApiResponse<Vec<ChatMessage>>, ApiError> {
    let chats = &state.entities.chats;
    if !chats.exists(&chat_id).await? {
        return Err(ApiError::not_found(CHAT_NOT_FOUND));
    }
    Ok(ApiResponse::ok(chats.list_messages(&chat_id).await?))
}

/// `POST /api/chats/:id/messages` with `{ userId, text }`.
pub async fn send_message(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<ChatMessage>, ApiError> {
    let body = json_body(payload)?;
    let (Some(user_id), Some(text)) = (trimmed(&body, "userId"), trimmed(&body, "text")) else {
        return Err(ApiError::bad_request("userId and text required"));
    };
    match state.entities.chats.send_message(&chat_id, user_id, text).await {
        Ok(message) => Ok(ApiResponse::ok(message)),
        Err(EntityError::NotFound { .. }) => Err(ApiError::not_found(CHAT_NOT_FOUND)),
        Err(e) => Err(e.into()),
    }
}

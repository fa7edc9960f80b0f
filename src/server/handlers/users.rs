use super::{json_body, trimmed};
use crate::entity::{Entity, User};
use crate::server::{ApiError, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

/// `POST /api/users` with `{ name }`.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<User>, ApiError> {
    let body = json_body(payload)?;
    let name = trimmed(&body, "name").ok_or_else(|| ApiError::bad_request("name required"))?;
    let user = User {
        id: User::new_id(),
        name: name.to_string(),
    };
    Ok(ApiResponse::ok(state.entities.users.create(user).await?))
}

mod chats;
mod entities;
mod health;
mod records;
mod users;

pub use chats::{create_chat, list_messages, send_message};
pub use entities::{delete_entity, get_entity, list_entities};
pub use health::{health, not_found};
pub use records::{create_claim, create_customer, create_policy};
pub use users::create_user;

use super::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

/// Unwrap a JSON body, turning a malformed one into a 400 envelope.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    payload.map(|Json(body)| body).map_err(ApiError::from)
}

/// The trimmed string at `field`, if present and not blank.
fn trimmed<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

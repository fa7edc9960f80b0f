use super::ApiResponse;
use crate::entity::EntityError;
use crate::storage::StoreError;
use crate::validation::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

/// Maps a domain error to an HTTP status and a stable error code.
pub trait ToHttpError {
    fn status_and_code(&self) -> (StatusCode, &'static str);
}

impl ToHttpError for StoreError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            StoreError::InvalidKey(_) => (StatusCode::BAD_REQUEST, "INVALID_KEY"),
            StoreError::IoError(_) | StoreError::JsonError(_) | StoreError::TaskError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
        }
    }
}

impl ToHttpError for EntityError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            EntityError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            EntityError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EntityError::StorageError(e) => e.status_and_code(),
        }
    }
}

impl ToHttpError for ValidationError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
    }
}

impl ToHttpError for JsonRejection {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        (StatusCode::BAD_REQUEST, "INVALID_JSON")
    }
}

/// A failed request, rendered as the error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    fn from_domain<E: ToHttpError + std::fmt::Display>(err: &E) -> Self {
        let (status, code) = err.status_and_code();
        Self::new(status, code, err.to_string())
    }
}

impl From<EntityError> for ApiError {
    fn from(err: EntityError) -> Self {
        Self::from_domain(&err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::from_domain(&err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::from_domain(&err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        let (status, code) = err.status_and_code();
        Self::new(status, code, format!("Invalid JSON body: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, error = %self.message, "Request failed");
        } else {
            warn!(
                status = self.status.as_u16(),
                code = self.code,
                error = %self.message,
                "Request rejected"
            );
        }
        (self.status, Json(ApiResponse::failure(self.code, self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_mapping() {
        let cases = [
            (EntityError::not_found("Policy", "pol_x"), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (EntityError::validation("bad"), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            (
                EntityError::StorageError(StoreError::TaskError("join".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
            ),
            (
                EntityError::StorageError(StoreError::InvalidKey("../x".into())),
                StatusCode::BAD_REQUEST,
                "INVALID_KEY",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (status, code), "{err}");
        }
    }

    #[test]
    fn test_api_error_keeps_display_message() {
        let api: ApiError = EntityError::not_found("Claim", "clm_x").into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.message, "Claim not found");
    }
}

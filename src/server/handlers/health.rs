use crate::server::{ApiError, ApiResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /api/health`
pub async fn health() -> ApiResponse<Health> {
    ApiResponse::ok(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Any route not matched above.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

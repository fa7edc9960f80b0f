//! Create routes for the insurance records, each gated by its schema.

use super::json_body;
use crate::entity::{Claim, Customer, Entity, Policy};
use crate::server::{ApiError, ApiResponse, AppState};
use crate::validation::{validate_claim, validate_customer, validate_policy};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

/// `POST /api/customers`
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let input = validate_customer(&json_body(payload)?)?;
    let customer = input.into_record(Customer::new_id());
    Ok(ApiResponse::ok(state.entities.customers.create(customer).await?))
}

/// `POST /api/policies`
pub async fn create_policy(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<Policy>, ApiError> {
    let input = validate_policy(&json_body(payload)?)?;
    let policy = input.into_record(Policy::new_id());
    Ok(ApiResponse::ok(state.entities.policies.create(policy).await?))
}

/// `POST /api/claims`
pub async fn create_claim(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<Claim>, ApiError> {
    let input = validate_claim(&json_body(payload)?)?;
    let claim = input.into_record(Claim::new_id());
    Ok(ApiResponse::ok(state.entities.claims.create(claim).await?))
}

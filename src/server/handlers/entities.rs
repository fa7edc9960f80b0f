use crate::index::Page;
use crate::server::{ApiError, ApiResponse, AppState, Routed};
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub cursor: Option<String>,
    pub limit: Option<String>,
}

/// Read `limit` the lenient way the console sends it: blank means absent,
/// fractions are truncated, and anything non-numeric counts as zero.
fn parse_limit(raw: Option<&str>) -> Option<i64> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    #[allow(clippy::cast_possible_truncation)]
    let truncated = raw
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map_or(0, |f| f.trunc() as i64);
    Some(truncated)
}

/// `GET /api/{kind}s` - seeds the kind on first use, then pages through it.
pub async fn list_entities<T: Routed>(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<ApiResponse<Page<T>>, ApiError> {
    let repo = T::repository(&state.entities);
    repo.ensure_seed().await?;
    let cursor = params.cursor.as_deref().filter(|c| !c.is_empty());
    let page = repo.list(cursor, parse_limit(params.limit.as_deref())).await?;
    Ok(ApiResponse::ok(page))
}

/// `GET /api/{kind}s/:id`
pub async fn get_entity<T: Routed>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<T>, ApiError> {
    let record = T::repository(&state.entities).find(&id).await?;
    Ok(ApiResponse::ok(record))
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: String,
    pub deleted: bool,
}

/// `DELETE /api/{kind}s/:id` - 404 when there was nothing to delete.
pub async fn delete_entity<T: Routed>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Deleted>, ApiError> {
    if !T::repository(&state.entities).delete(&id).await? {
        return Err(ApiError::not_found(format!("{} not found", T::LABEL)));
    }
    Ok(ApiResponse::ok(Deleted { id, deleted: true }))
}

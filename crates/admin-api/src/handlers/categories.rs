// ============================================================================
// Admin API - Category Handlers
// File: crates/admin-api/src/handlers/categories.rs
// ============================================================================
//! Category listing, create, update and two-phase delete

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use admin_core::domain::{Category, CategoryPage};
use admin_core::services::DeleteOutcome;

use crate::error::ApiError;
use crate::middleware::CurrentPrincipal;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub start: u32,
}

/// Create / update payload
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirmed: bool,
}

/// GET /admin/categories
pub async fn list_categories(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<CategoryPage>>, ApiError> {
    let page = state.categories.list(&principal, query.start).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// POST /admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(payload): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    let category = state
        .categories
        .create(&payload.name, &payload.description, &principal)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(category))))
}

/// PUT /admin/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state
        .categories
        .update(id, &payload.name, &payload.description, &principal)
        .await?;
    Ok(Json(ApiResponse::success(category)))
}

/// DELETE /admin/categories/{id}?confirmed=bool
///
/// Without `confirmed=true` nothing is deleted; the category is returned for
/// the confirmation prompt.
pub async fn delete_category(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<i64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<ApiResponse<DeleteOutcome>>, ApiError> {
    let outcome = state.categories.delete(id, query.confirmed, &principal).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

// ============================================================================
// Admin API - Config Handlers
// File: crates/admin-api/src/handlers/config.rs
// ============================================================================

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Deserialize;

use admin_core::domain::ConfigFields;
use admin_core::services::{ConfigForm, ConfigUpdateReport};

use crate::error::ApiError;
use crate::middleware::CurrentPrincipal;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Config form submission: raw field values plus module placements
#[derive(Debug, Deserialize)]
pub struct ConfigUpdateRequest {
    #[serde(flatten)]
    pub fields: ConfigFields,
    /// Module name to target category id.
    #[serde(default)]
    pub module_categories: BTreeMap<String, Option<i64>>,
}

/// GET /admin/config
pub async fn show_config(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<ApiResponse<ConfigForm>>, ApiError> {
    let form = state.config.form(&principal).await?;
    Ok(Json(ApiResponse::success(form)))
}

/// PUT /admin/config
pub async fn update_config(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(payload): Json<ConfigUpdateRequest>,
) -> Result<Json<ApiResponse<ConfigUpdateReport>>, ApiError> {
    let report = state
        .config
        .apply(payload.fields, &payload.module_categories, &principal)
        .await?;
    Ok(Json(ApiResponse::success(report)))
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use admin_core::domain::UpdateNotice;

use crate::error::ApiError;
use crate::handlers::require_authenticated;
use crate::middleware::CurrentPrincipal;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateQuery {
    #[serde(default)]
    pub force: bool,
}

/// GET /admin/update-check?force=bool
pub async fn check_update(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Query(query): Query<UpdateQuery>,
) -> Result<Json<ApiResponse<UpdateNotice>>, ApiError> {
    require_authenticated(&principal)?;
    let notice = state.updates.check(query.force).await?;
    Ok(Json(ApiResponse::success(notice)))
}

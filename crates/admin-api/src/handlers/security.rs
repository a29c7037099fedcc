use axum::{extract::State, Json};

use admin_core::domain::SecurityReport;

use crate::error::ApiError;
use crate::handlers::require_authenticated;
use crate::middleware::CurrentPrincipal;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /admin/security
pub async fn security_report(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<ApiResponse<SecurityReport>>, ApiError> {
    require_authenticated(&principal)?;
    let report = state.security.report().await?;
    Ok(Json(ApiResponse::success(report)))
}

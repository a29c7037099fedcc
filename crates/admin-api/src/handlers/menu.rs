// ============================================================================
// Admin API - Menu Handler
// File: crates/admin-api/src/handlers/menu.rs
// ============================================================================

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use admin_core::domain::{CategoryMenu, DeveloperNotices, SecurityReport, UpdateNotice};

use crate::error::ApiError;
use crate::middleware::CurrentPrincipal;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Requested category id.
    pub acid: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AdminNotices {
    pub security: SecurityReport,
    pub update: UpdateNotice,
    pub developer: DeveloperNotices,
}

#[derive(Debug, Serialize)]
pub struct MenuPage {
    pub menu: CategoryMenu,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notices: Option<AdminNotices>,
}

/// GET /admin
pub async fn show_menu(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Query(query): Query<MenuQuery>,
) -> Result<Json<ApiResponse<MenuPage>>, ApiError> {
    let menu = state.menu.build_menu(&principal, query.acid).await?;

    let notices = if principal.authenticated && !menu.options.is_empty() {
        Some(AdminNotices {
            security: state.security.report().await?,
            update: state.updates.check(false).await?,
            developer: state.security.developer_notices().await?,
        })
    } else {
        None
    };

    Ok(Json(ApiResponse::success(MenuPage { menu, notices })))
}

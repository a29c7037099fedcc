use axum::{
    extract::{Query, State},
    Json,
};

use admin_core::domain::PanelView;

use crate::error::ApiError;
use crate::handlers::menu::MenuQuery;
use crate::middleware::CurrentPrincipal;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /admin/panel
pub async fn show_panel(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Query(query): Query<MenuQuery>,
) -> Result<Json<ApiResponse<PanelView>>, ApiError> {
    let view = state.menu.build_panel(&principal, query.acid).await?;
    Ok(Json(ApiResponse::success(view)))
}

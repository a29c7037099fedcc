// ============================================================================
// Admin API - Router
// File: crates/admin-api/src/router.rs
// ============================================================================

use axum::{
    http::{header::CONTENT_TYPE, header::InvalidHeaderValue, HeaderName, HeaderValue, Method},
    middleware::from_fn,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use admin_shared::constants::CSRF_HEADER_NAME;

use crate::handlers::{categories, config, csrf, health, menu, panel, security, update};
use crate::middleware::csrf_guard;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Admin routes (state-changing methods pass the CSRF guard first)
    let admin_routes = Router::new()
        .route("/admin", get(menu::show_menu))
        .route("/admin/panel", get(panel::show_panel))
        .route(
            "/admin/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/admin/categories/{id}",
            axum::routing::put(categories::update_category).delete(categories::delete_category),
        )
        .route("/admin/config", get(config::show_config).put(config::update_config))
        .route("/admin/update-check", get(update::check_update))
        .route("/admin/security", get(security::security_report))
        .route("/admin/csrf", get(csrf::issue_token))
        .layer(from_fn(csrf_guard))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health_check))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// CORS for the configured browser origins.
///
/// The principal header is never allowed cross-origin: only the front proxy
/// may set it.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(CSRF_HEADER_NAME)]))
}

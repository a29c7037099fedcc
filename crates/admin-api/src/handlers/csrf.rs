use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::Serialize;

use crate::middleware::csrf::{csrf_cookie, generate_csrf_token};
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct CsrfToken {
    pub token: String,
}

/// GET /admin/csrf - issue a fresh token as cookie and body
pub async fn issue_token() -> impl IntoResponse {
    let token = generate_csrf_token();
    (
        AppendHeaders([(SET_COOKIE, csrf_cookie(&token))]),
        Json(ApiResponse::success(CsrfToken { token })),
    )
}

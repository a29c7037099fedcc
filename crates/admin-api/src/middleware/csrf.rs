// ============================================================================
// Admin API - CSRF Double Submit
// File: crates/admin-api/src/middleware/csrf.rs
// ============================================================================
//! Anti-forgery check for state-changing requests.
//!
//! A token is issued as a cookie and echoed back by the client in a header;
//! POST, PUT, PATCH and DELETE are rejected unless both are present and equal.
//! The check runs before any handler touches the core.

use axum::{
    extract::Request,
    http::{header::COOKIE, HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use rand::Rng;
use subtle::ConstantTimeEq;
use tracing::warn;

use admin_shared::constants::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME};

use crate::error::ApiError;

pub fn generate_csrf_token() -> String {
    let token: [u8; 32] = rand::rng().random();
    hex::encode(token)
}

pub fn validate_csrf_token(token: &str, expected: &str) -> bool {
    !expected.is_empty() && bool::from(token.as_bytes().ct_eq(expected.as_bytes()))
}

/// `Set-Cookie` value carrying `token`.
pub fn csrf_cookie(token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Strict", CSRF_COOKIE_NAME, token)
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn is_state_changing(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH | Method::DELETE)
}

pub async fn csrf_guard(request: Request, next: Next) -> Result<Response, ApiError> {
    if !is_state_changing(request.method()) {
        return Ok(next.run(request).await);
    }

    let headers = request.headers();
    let valid = match (
        headers.get(CSRF_HEADER_NAME).and_then(|v| v.to_str().ok()),
        cookie_value(headers, CSRF_COOKIE_NAME),
    ) {
        (Some(token), Some(expected)) => validate_csrf_token(token, expected),
        _ => false,
    };

    if !valid {
        warn!("CSRF check failed: {} {}", request.method(), request.uri().path());
        return Err(ApiError::Forbidden("Invalid or missing CSRF token".into()));
    }

    Ok(next.run(request).await)
}

// ============================================================================
// Admin API - Error Mapping
// File: crates/admin-api/src/error.rs
// ============================================================================

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use admin_core::error::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest { message: message.into(), fields: BTreeMap::new() }
    }
}

fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string()))
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PermissionDenied => ApiError::Forbidden("Permission denied".into()),
            DomainError::CategoryNotFound(_) | DomainError::ModuleNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            DomainError::CategoryNameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            DomainError::InvalidConfig(errors) => ApiError::BadRequest {
                message: "Invalid configuration".into(),
                fields: field_messages(&errors),
            },
            DomainError::ValidationError(msg) => ApiError::bad_request(msg),
            DomainError::UpstreamUnavailable(msg) => ApiError::Upstream(msg),
            DomainError::InternalError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            ApiError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, "FORBIDDEN", msg, BTreeMap::new())
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg, BTreeMap::new())
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "CONFLICT", msg, BTreeMap::new())
            }
            ApiError::BadRequest { message, fields } => {
                tracing::warn!("Bad request: {}", message);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, fields)
            }
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE", msg, BTreeMap::new())
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                // Details stay in the log.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    BTreeMap::new(),
                )
            }
        };

        (status, Json(ApiResponse::<()>::field_error(code, &message, fields))).into_response()
    }
}

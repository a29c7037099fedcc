//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Category name already exists: {0}")]
    CategoryNameAlreadyExists(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(validator::ValidationErrors),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}

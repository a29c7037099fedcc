//! HTTP handlers

pub mod categories;
pub mod config;
pub mod csrf;
pub mod health;
pub mod menu;
pub mod panel;
pub mod security;
pub mod update;

use admin_core::domain::Principal;

use crate::error::ApiError;

/// Site notices are only shown to signed-in users.
pub(crate) fn require_authenticated(principal: &Principal) -> Result<(), ApiError> {
    if principal.authenticated {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Authentication required".into()))
    }
}

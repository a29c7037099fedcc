//! Permission helpers shared by the services

use tracing::warn;

use crate::domain::permission::ADMIN_COMPONENT;
use crate::domain::{AccessLevel, Category, Principal};
use crate::error::DomainError;
use crate::repositories::PermissionOracle;

/// Fail with `PermissionDenied` unless the oracle grants `level`.
pub async fn require(
    oracle: &dyn PermissionOracle,
    principal: &Principal,
    component: &str,
    instance: &str,
    level: AccessLevel,
) -> Result<(), DomainError> {
    if oracle.check(principal, component, instance, level).await {
        Ok(())
    } else {
        warn!(
            "Permission denied: {} lacks {} on {} {}",
            principal.name,
            level.as_str(),
            component,
            instance
        );
        Err(DomainError::PermissionDenied)
    }
}

/// Keep the categories the principal may read, preserving order.
pub async fn readable_categories(
    oracle: &dyn PermissionOracle,
    principal: &Principal,
    categories: Vec<Category>,
) -> Vec<Category> {
    let mut visible = Vec::with_capacity(categories.len());
    for category in categories {
        if oracle
            .check(principal, ADMIN_COMPONENT, &category.instance_scope(), AccessLevel::Read)
            .await
        {
            visible.push(category);
        }
    }
    visible
}

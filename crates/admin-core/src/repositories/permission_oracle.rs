//! Permission oracle trait (port)

use async_trait::async_trait;

use crate::domain::{AccessLevel, Principal};

/// Answers whether a principal holds `level` on `(component, instance)`.
#[async_trait]
pub trait PermissionOracle: Send + Sync {
    async fn check(
        &self,
        principal: &Principal,
        component: &str,
        instance: &str,
        level: AccessLevel,
    ) -> bool;
}

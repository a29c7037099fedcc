//! Module registry trait (port)

use async_trait::async_trait;

use crate::domain::ModuleDescriptor;
use crate::error::DomainError;

#[async_trait]
pub trait ModuleRegistry: Send + Sync {
    /// Installed modules capable of exposing an admin panel.
    async fn list_admin_capable(&self) -> Result<Vec<ModuleDescriptor>, DomainError>;
    async fn resolve_module_id(&self, name: &str) -> Result<Option<i64>, DomainError>;
    /// Raw assignment; may point at a category that has since been deleted.
    async fn assigned_category(&self, module_id: i64) -> Result<Option<i64>, DomainError>;
    async fn sort_order(&self, module_id: i64) -> Result<Option<i32>, DomainError>;
    async fn assign_category(&self, module_id: i64, category_id: i64) -> Result<(), DomainError>;
}

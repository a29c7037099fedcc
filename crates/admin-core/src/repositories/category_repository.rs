//! Category repository trait (port)

use async_trait::async_trait;

use crate::domain::{Category, NewCategory};
use crate::error::DomainError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in menu order.
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;
    async fn find_page(&self, offset: u32, limit: u32) -> Result<Vec<Category>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;
    /// Fails with `CategoryNameAlreadyExists` on a name collision.
    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError>;
    async fn update(&self, category: &Category) -> Result<Category, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

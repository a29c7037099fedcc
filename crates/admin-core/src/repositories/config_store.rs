//! Namespaced key/value config store trait (port)

use async_trait::async_trait;

use crate::domain::Vars;
use crate::error::DomainError;

#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get_all(&self, namespace: &str) -> Result<Vars, DomainError>;
    /// Write every pair as one batch; readers never observe a partial batch.
    async fn set_many(&self, namespace: &str, vars: Vars) -> Result<(), DomainError>;
}

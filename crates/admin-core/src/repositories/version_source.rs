//! Remote version endpoint trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Latest published version. Implementations bound the call with a
    /// timeout and report any failure as `UpstreamUnavailable`.
    async fn fetch_latest(&self) -> Result<String, DomainError>;
}

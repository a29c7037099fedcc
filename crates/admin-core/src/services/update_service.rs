// ============================================================================
// Admin Core - Update Service
// File: crates/admin-core/src/services/update_service.rs
// ============================================================================
//! TTL-cached check for a newer platform version

use std::sync::Arc;

use admin_shared::constants::SYSTEM_NAMESPACE;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::version;
use crate::domain::{UpdateCheckCache, UpdateNotice};
use crate::error::DomainError;
use crate::repositories::{ConfigStore, VersionSource};

pub struct UpdateService {
    config: Arc<dyn ConfigStore>,
    source: Arc<dyn VersionSource>,
    running_version: String,
}

impl UpdateService {
    pub fn new(config: Arc<dyn ConfigStore>, source: Arc<dyn VersionSource>, running_version: String) -> Self {
        Self { config, source, running_version }
    }

    pub async fn check(&self, force: bool) -> Result<UpdateNotice, DomainError> {
        self.check_at(force, Utc::now().timestamp()).await
    }

    /// Check against the cache at `now` (epoch seconds).
    ///
    /// A fresh cache never touches the network. A failed fetch yields a
    /// hidden notice and leaves the cache timestamp alone so the next call
    /// retries.
    pub async fn check_at(&self, force: bool, now: i64) -> Result<UpdateNotice, DomainError> {
        let mut cache = UpdateCheckCache::from_vars(&self.config.get_all(SYSTEM_NAMESPACE).await?);
        if !cache.enabled {
            return Ok(UpdateNotice::hidden());
        }

        let remote = if !force && cache.is_fresh(now) {
            debug!("Update check served from cache (version {})", cache.cached_version);
            cache.cached_version.clone()
        } else {
            match self.source.fetch_latest().await {
                Ok(fetched) => {
                    let fetched = fetched.trim().to_string();
                    let vars = cache.record(fetched.clone(), now);
                    self.config.set_many(SYSTEM_NAMESPACE, vars).await?;
                    info!("Fetched remote version {}", fetched);
                    fetched
                }
                Err(e) => {
                    warn!("Update check failed: {}", e);
                    return Ok(UpdateNotice::hidden());
                }
            }
        };

        if !remote.is_empty() && version::is_newer(&remote, &self.running_version) {
            Ok(UpdateNotice::available(remote))
        } else {
            Ok(UpdateNotice::hidden())
        }
    }
}

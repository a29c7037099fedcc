// ============================================================================
// Admin Infrastructure - HTTP Version Source
// File: crates/admin-infrastructure/src/http/version_client.rs
// ============================================================================
//! Single best-effort GET against the remote version endpoint.
//!
//! No retries and no fallback to plain HTTP: a timeout, transport error,
//! non-success status or empty body is reported as `UpstreamUnavailable`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use admin_core::error::DomainError;
use admin_core::repositories::VersionSource;

pub struct HttpVersionSource {
    client: Client,
    endpoint: String,
}

impl HttpVersionSource {
    pub fn new(endpoint: String, timeout: Duration, running_version: &str) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(format!("AdminPanel/{}", running_version))
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl VersionSource for HttpVersionSource {
    async fn fetch_latest(&self) -> Result<String, DomainError> {
        debug!("Fetching latest version from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(format!("Failed to call version endpoint: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "Version endpoint returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(format!("Failed to read version body: {}", e)))?;

        let version = body.trim();
        if version.is_empty() {
            return Err(DomainError::UpstreamUnavailable("Empty version body".into()));
        }
        Ok(version.to_string())
    }
}

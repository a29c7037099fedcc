//! In-memory namespaced key/value store

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use admin_core::domain::Vars;
use admin_core::error::DomainError;
use admin_core::repositories::ConfigStore;

#[derive(Default)]
pub struct InMemoryConfigStore {
    namespaces: RwLock<HashMap<String, Vars>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get_all(&self, namespace: &str) -> Result<Vars, DomainError> {
        Ok(self.namespaces.read().get(namespace).cloned().unwrap_or_default())
    }

    async fn set_many(&self, namespace: &str, vars: Vars) -> Result<(), DomainError> {
        // single write lock: the whole batch becomes visible at once
        self.namespaces
            .write()
            .entry(namespace.to_string())
            .or_default()
            .extend(vars);
        Ok(())
    }
}

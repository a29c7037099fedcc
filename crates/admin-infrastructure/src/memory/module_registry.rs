// ============================================================================
// Admin Infrastructure - In-Memory Module Registry
// File: crates/admin-infrastructure/src/memory/module_registry.rs
// ============================================================================

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use admin_core::domain::ModuleDescriptor;
use admin_core::error::DomainError;
use admin_core::repositories::ModuleRegistry;

#[derive(Debug, Clone, Copy, Default)]
struct Placement {
    category_id: Option<i64>,
    sort_order: Option<i32>,
}

/// Installed admin-capable modules and their category placement
pub struct InMemoryModuleRegistry {
    modules: Vec<ModuleDescriptor>,
    placements: RwLock<HashMap<i64, Placement>>,
}

impl InMemoryModuleRegistry {
    pub fn new(modules: Vec<ModuleDescriptor>) -> Self {
        Self { modules, placements: RwLock::new(HashMap::new()) }
    }

    pub fn set_sort_order(&self, module_id: i64, sort_order: i32) {
        self.placements.write().entry(module_id).or_default().sort_order = Some(sort_order);
    }
}

#[async_trait]
impl ModuleRegistry for InMemoryModuleRegistry {
    async fn list_admin_capable(&self) -> Result<Vec<ModuleDescriptor>, DomainError> {
        Ok(self.modules.clone())
    }

    async fn resolve_module_id(&self, name: &str) -> Result<Option<i64>, DomainError> {
        Ok(self.modules.iter().find(|m| m.name == name).map(|m| m.id))
    }

    async fn assigned_category(&self, module_id: i64) -> Result<Option<i64>, DomainError> {
        Ok(self.placements.read().get(&module_id).and_then(|p| p.category_id))
    }

    async fn sort_order(&self, module_id: i64) -> Result<Option<i32>, DomainError> {
        Ok(self.placements.read().get(&module_id).and_then(|p| p.sort_order))
    }

    async fn assign_category(&self, module_id: i64, category_id: i64) -> Result<(), DomainError> {
        if !self.modules.iter().any(|m| m.id == module_id) {
            return Err(DomainError::ModuleNotFound(module_id.to_string()));
        }
        self.placements.write().entry(module_id).or_default().category_id = Some(category_id);
        Ok(())
    }
}

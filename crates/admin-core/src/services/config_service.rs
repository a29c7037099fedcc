// ============================================================================
// Admin Core - Config Service
// File: crates/admin-core/src/services/config_service.rs
// ============================================================================
//! Module configuration form and batch update

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use admin_shared::constants::ADMIN_NAMESPACE;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::permission::{ADMIN_COMPONENT, ANY_INSTANCE};
use crate::domain::{
    AccessLevel, Category, ConfigFields, ModuleCategoryRow, ModuleConfig, ModuleDescriptor,
    Principal,
};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, ConfigStore, ModuleRegistry, PermissionOracle};
use crate::services::access;

/// Non-fatal failure to move a module into a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentWarning {
    pub module_name: String,
    pub category_id: i64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigUpdateReport {
    pub config: ModuleConfig,
    pub warnings: Vec<AssignmentWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigForm {
    pub config: ModuleConfig,
    pub categories: Vec<Category>,
    pub modules: Vec<ModuleCategoryRow>,
}

pub struct ConfigService {
    categories: Arc<dyn CategoryRepository>,
    modules: Arc<dyn ModuleRegistry>,
    config: Arc<dyn ConfigStore>,
    oracle: Arc<dyn PermissionOracle>,
}

impl ConfigService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        modules: Arc<dyn ModuleRegistry>,
        config: Arc<dyn ConfigStore>,
        oracle: Arc<dyn PermissionOracle>,
    ) -> Self {
        Self { categories, modules, config, oracle }
    }

    pub async fn load(&self) -> Result<ModuleConfig, DomainError> {
        Ok(ModuleConfig::from_vars(&self.config.get_all(ADMIN_NAMESPACE).await?))
    }

    /// Current settings plus every module's effective category
    pub async fn form(&self, principal: &Principal) -> Result<ConfigForm, DomainError> {
        self.require_admin(principal).await?;

        let config = self.load().await?;
        let all = self.categories.find_all().await?;
        let known: HashSet<i64> = all.iter().map(|c| c.id).collect();
        let categories = access::readable_categories(self.oracle.as_ref(), principal, all).await;

        let mut modules = Vec::new();
        for module in self.modules.list_admin_capable().await? {
            let category_id = self
                .modules
                .assigned_category(module.id)
                .await?
                .filter(|id| known.contains(id))
                .unwrap_or(config.default_category_id);
            modules.push(ModuleCategoryRow {
                name: module.name,
                display_name: module.display_name,
                category_id,
            });
        }

        Ok(ConfigForm { config, categories, modules })
    }

    /// Validate and persist the config fields, then apply module assignments
    ///
    /// Config fields are all-or-nothing: any field error aborts before a
    /// single write. Module assignments are independent; each failure becomes
    /// a warning and the module keeps its previous category.
    pub async fn apply(
        &self,
        fields: ConfigFields,
        assignments: &BTreeMap<String, Option<i64>>,
        principal: &Principal,
    ) -> Result<ConfigUpdateReport, DomainError> {
        info!("Config update requested by {}", principal.name);
        self.require_admin(principal).await?;

        let config = fields.into_config().map_err(|errors| {
            warn!("Config update rejected: {}", errors);
            DomainError::InvalidConfig(errors)
        })?;

        self.config.set_many(ADMIN_NAMESPACE, config.to_vars()).await?;

        let mut warnings = Vec::new();
        for module in self.modules.list_admin_capable().await? {
            let Some(Some(category_id)) = assignments.get(&module.name) else {
                continue;
            };
            if *category_id <= 0 {
                continue;
            }
            if let Err(reason) = self.assign(&module, *category_id).await {
                warn!(
                    "Could not add module {} to category {}: {}",
                    module.name, category_id, reason
                );
                warnings.push(AssignmentWarning {
                    module_name: module.name.clone(),
                    category_id: *category_id,
                    reason,
                });
            }
        }

        info!("Saved module configuration ({} assignment warnings)", warnings.len());
        Ok(ConfigUpdateReport { config, warnings })
    }

    async fn assign(&self, module: &ModuleDescriptor, category_id: i64) -> Result<(), String> {
        match self.categories.find_by_id(category_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(format!("category {} does not exist", category_id)),
            Err(e) => return Err(e.to_string()),
        }

        let module_id = self
            .modules
            .resolve_module_id(&module.name)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| DomainError::ModuleNotFound(module.name.clone()).to_string())?;

        self.modules
            .assign_category(module_id, category_id)
            .await
            .map_err(|e| e.to_string())
    }

    async fn require_admin(&self, principal: &Principal) -> Result<(), DomainError> {
        access::require(self.oracle.as_ref(), principal, ADMIN_COMPONENT, ANY_INSTANCE, AccessLevel::Admin)
            .await
    }
}

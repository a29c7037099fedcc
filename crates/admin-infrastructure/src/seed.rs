// ============================================================================
// Admin Infrastructure - Store Seeding
// File: crates/admin-infrastructure/src/seed.rs
// ============================================================================
//! Builds the in-memory stores from the `[seed]` section of the settings.

use std::sync::Arc;

use tracing::{info, warn};

use admin_core::domain::{ModuleDescriptor, ModuleKind, NewCategory};
use admin_core::error::DomainError;
use admin_core::repositories::{CategoryRepository, ConfigStore, ModuleRegistry};
use admin_shared::config::SeedSettings;

use crate::memory::{InMemoryCategoryStore, InMemoryConfigStore, InMemoryModuleRegistry};

pub struct SeededStores {
    pub categories: Arc<InMemoryCategoryStore>,
    pub modules: Arc<InMemoryModuleRegistry>,
    pub config: Arc<InMemoryConfigStore>,
}

impl SeededStores {
    pub async fn from_settings(seed: &SeedSettings) -> Result<Self, DomainError> {
        let categories = Arc::new(InMemoryCategoryStore::new());
        for entry in &seed.categories {
            let new_category = NewCategory::new(&entry.name, &entry.description)?;
            categories.create(&new_category).await?;
        }

        let descriptors = seed
            .modules
            .iter()
            .enumerate()
            .map(|(index, m)| {
                let kind = ModuleKind::from_str(&m.kind).ok_or_else(|| {
                    DomainError::ValidationError(format!("Unknown module kind '{}' for {}", m.kind, m.name))
                })?;
                Ok(ModuleDescriptor {
                    name: m.name.clone(),
                    id: index as i64 + 1,
                    display_name: m.display_name.clone(),
                    description: m.description.clone(),
                    icon_path: m.icon_path.clone(),
                    kind,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let modules = Arc::new(InMemoryModuleRegistry::new(descriptors.clone()));
        for (descriptor, entry) in descriptors.iter().zip(&seed.modules) {
            modules.set_sort_order(descriptor.id, entry.sort_order);

            let Some(category_name) = &entry.category else { continue };
            match categories.find_by_name(category_name).await? {
                Some(category) => modules.assign_category(descriptor.id, category.id).await?,
                None => warn!("Seed module {} references unknown category '{}'", entry.name, category_name),
            }
        }

        let config = Arc::new(InMemoryConfigStore::new());
        for (namespace, vars) in &seed.vars {
            config.set_many(namespace, vars.clone()).await?;
        }

        info!(
            "Seeded {} categories, {} modules, {} config namespaces",
            seed.categories.len(),
            descriptors.len(),
            seed.vars.len()
        );

        Ok(Self { categories, modules, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use admin_shared::config::{SeedCategory, SeedModule};
    use serde_json::json;

    fn seed_module(name: &str, category: Option<&str>, sort_order: i32) -> SeedModule {
        SeedModule {
            name: name.into(),
            display_name: name.trim_end_matches("Module").into(),
            description: String::new(),
            icon_path: String::new(),
            kind: "system".into(),
            category: category.map(str::to_string),
            sort_order,
        }
    }

    #[tokio::test]
    async fn test_seeds_all_stores() {
        let mut admin_vars = HashMap::new();
        admin_vars.insert("itemsperpage".to_string(), json!(10));
        let mut vars = HashMap::new();
        vars.insert("AdminModule".to_string(), admin_vars);

        let seed = SeedSettings {
            categories: vec![
                SeedCategory { name: "System".into(), description: "Core".into() },
                SeedCategory { name: "Layout".into(), description: String::new() },
            ],
            modules: vec![
                seed_module("UsersModule", Some("System"), 2),
                seed_module("ThemeModule", Some("Layout"), 0),
                seed_module("BlocksModule", Some("Missing"), 0),
            ],
            vars,
        };

        let stores = SeededStores::from_settings(&seed).await.unwrap();

        assert_eq!(stores.categories.count().await.unwrap(), 2);
        assert_eq!(stores.modules.assigned_category(1).await.unwrap(), Some(1));
        assert_eq!(stores.modules.assigned_category(2).await.unwrap(), Some(2));
        assert_eq!(stores.modules.assigned_category(3).await.unwrap(), None);
        assert_eq!(stores.modules.sort_order(1).await.unwrap(), Some(2));
        assert_eq!(stores.config.get_all("AdminModule").await.unwrap()["itemsperpage"], json!(10));
    }

    #[tokio::test]
    async fn test_unknown_module_kind_is_rejected() {
        let mut module = seed_module("UsersModule", None, 0);
        module.kind = "plugin".into();
        let seed = SeedSettings { modules: vec![module], ..Default::default() };

        assert!(matches!(
            SeededStores::from_settings(&seed).await,
            Err(DomainError::ValidationError(_))
        ));
    }
}

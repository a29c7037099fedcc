// ============================================================================
// Admin Core - Category Service
// File: crates/admin-core/src/services/category_service.rs
// ============================================================================
//! Category lifecycle: create, update, list and two-phase delete

use std::sync::Arc;

use admin_shared::constants::ADMIN_NAMESPACE;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::permission::{category_name_instance, ADMIN_COMPONENT, ANY_INSTANCE, CATEGORY_COMPONENT};
use crate::domain::{AccessLevel, Category, CategoryPage, ModuleConfig, NewCategory, Principal};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, ConfigStore, PermissionOracle};
use crate::services::access;

/// Outcome of a delete request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "category", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// Phase one: nothing was changed, the caller must confirm.
    PendingConfirmation(Category),
    Deleted(Category),
}

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    config: Arc<dyn ConfigStore>,
    oracle: Arc<dyn PermissionOracle>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        config: Arc<dyn ConfigStore>,
        oracle: Arc<dyn PermissionOracle>,
    ) -> Self {
        Self { categories, config, oracle }
    }

    /// Paginated listing of readable categories
    pub async fn list(&self, principal: &Principal, start: u32) -> Result<CategoryPage, DomainError> {
        access::require(self.oracle.as_ref(), principal, ADMIN_COMPONENT, ANY_INSTANCE, AccessLevel::Edit)
            .await?;

        let config = ModuleConfig::from_vars(&self.config.get_all(ADMIN_NAMESPACE).await?);
        let page = self.categories.find_page(start, config.items_per_page).await?;
        let categories = access::readable_categories(self.oracle.as_ref(), principal, page).await;
        let total = self.categories.count().await?;

        Ok(CategoryPage { categories, total, start, items_per_page: config.items_per_page })
    }

    /// Create a category and return it with its new id
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        principal: &Principal,
    ) -> Result<Category, DomainError> {
        info!("Category create requested by {}: {}", principal.name, name);

        access::require(
            self.oracle.as_ref(),
            principal,
            CATEGORY_COMPONENT,
            &category_name_instance(name.trim()),
            AccessLevel::Add,
        )
        .await?;

        let new = NewCategory::new(name, description)?;

        if self.categories.find_by_name(&new.name).await?.is_some() {
            warn!("Category create failed: name already exists: {}", new.name);
            return Err(DomainError::CategoryNameAlreadyExists(new.name));
        }

        let created = self.categories.create(&new).await?;
        info!("Category created: {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Update name and description of an existing category
    ///
    /// Permission is checked against the stored name, so renaming cannot be
    /// used to slip out of a category-specific restriction. A rename also
    /// needs EDIT under the new name.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        principal: &Principal,
    ) -> Result<Category, DomainError> {
        info!("Category update requested by {}: {}", principal.name, id);

        let current = self.find_existing(id).await?;
        self.require_on(&current, principal, AccessLevel::Edit).await?;

        let new = NewCategory::new(name, description)?;
        if new.name != current.name {
            access::require(
                self.oracle.as_ref(),
                principal,
                CATEGORY_COMPONENT,
                &format!("{}::{}", new.name, id),
                AccessLevel::Edit,
            )
            .await?;

            if let Some(other) = self.categories.find_by_name(&new.name).await? {
                if other.id != id {
                    warn!("Category update failed: name already exists: {}", new.name);
                    return Err(DomainError::CategoryNameAlreadyExists(new.name));
                }
            }
        }

        let updated = self
            .categories
            .update(&Category { id, name: new.name, description: new.description })
            .await?;
        info!("Category updated: {} ({})", updated.name, updated.id);
        Ok(updated)
    }

    /// Two-phase delete
    ///
    /// Both phases validate existence and DELETE permission against the
    /// current store state; the confirmation call never trusts the first.
    /// Modules assigned to the deleted category are left as they are and
    /// read back as unassigned.
    pub async fn delete(
        &self,
        id: i64,
        confirmed: bool,
        principal: &Principal,
    ) -> Result<DeleteOutcome, DomainError> {
        let category = self.find_existing(id).await?;
        self.require_on(&category, principal, AccessLevel::Delete).await?;

        if !confirmed {
            return Ok(DeleteOutcome::PendingConfirmation(category));
        }

        self.categories.delete(id).await?;
        info!("Category deleted by {}: {} ({})", principal.name, category.name, id);
        Ok(DeleteOutcome::Deleted(category))
    }

    async fn find_existing(&self, id: i64) -> Result<Category, DomainError> {
        self.categories.find_by_id(id).await?.ok_or_else(|| {
            warn!("Category not found: {}", id);
            DomainError::CategoryNotFound(id)
        })
    }

    async fn require_on(
        &self,
        category: &Category,
        principal: &Principal,
        level: AccessLevel,
    ) -> Result<(), DomainError> {
        access::require(
            self.oracle.as_ref(),
            principal,
            CATEGORY_COMPONENT,
            &category.instance_scope(),
            level,
        )
        .await
    }
}

// ============================================================================
// Admin Core - Category Entity
// File: crates/admin-core/src/domain/category.rs
// Description: Administrator-defined grouping of modules in the admin menu
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Instance scope used for per-category permission checks (`name::id`).
    pub fn instance_scope(&self) -> String {
        format!("{}::{}", self.name, self.id)
    }
}

/// Input for creating or renaming a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(length(min = 1, max = 32, message = "Category name must be between 1 and 32 characters"))]
    pub name: String,

    #[validate(length(max = 254, message = "Description too long"))]
    pub description: String,
}

impl NewCategory {
    pub fn new(name: &str, description: &str) -> Result<Self, validator::ValidationErrors> {
        let category = Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
        };

        category.validate()?;
        Ok(category)
    }
}

/// One page of the category listing
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub categories: Vec<Category>,
    pub total: u64,
    pub start: u32,
    pub items_per_page: u32,
}

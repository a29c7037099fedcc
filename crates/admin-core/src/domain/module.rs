//! Installed module descriptors as supplied by the module registry

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    System,
    User,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::System => "system",
            ModuleKind::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "system" => Some(ModuleKind::System),
            "user" => Some(ModuleKind::User),
            _ => None,
        }
    }
}

/// Read-only metadata of an admin-capable module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    pub id: i64,
    pub display_name: String,
    pub description: String,
    pub icon_path: String,
    pub kind: ModuleKind,
}

impl ModuleDescriptor {
    /// Component scope for module-level permission checks (`Name::`).
    pub fn component_scope(&self) -> String {
        format!("{}::", self.name)
    }

    pub fn admin_url(&self) -> String {
        format!("/admin/modules/{}", self.name)
    }
}

/// A module with its effective category, as shown on the config form
#[derive(Debug, Clone, Serialize)]
pub struct ModuleCategoryRow {
    pub name: String,
    pub display_name: String,
    pub category_id: i64,
}

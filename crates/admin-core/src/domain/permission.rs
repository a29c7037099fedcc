//! Principals, access levels and the scope strings the admin module checks

use serde::{Deserialize, Serialize};

/// Component scope of the admin module itself.
pub const ADMIN_COMPONENT: &str = "AdminModule::";
/// Component scope of admin categories.
pub const CATEGORY_COMPONENT: &str = "AdminModule::Category";
/// Instance scope matching anything.
pub const ANY_INSTANCE: &str = "::";
/// Instance used for module-level menu checks.
pub const MODULE_INSTANCE: &str = "ANY";
/// Wildcard component/instance used for the super-admin capability.
pub const WILDCARD: &str = "*";

/// Access level, ordered by increasing privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Read,
    Add,
    Edit,
    Delete,
    Admin,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Read => "read",
            AccessLevel::Add => "add",
            AccessLevel::Edit => "edit",
            AccessLevel::Delete => "delete",
            AccessLevel::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "read" => Some(AccessLevel::Read),
            "add" => Some(AccessLevel::Add),
            "edit" => Some(AccessLevel::Edit),
            "delete" => Some(AccessLevel::Delete),
            "admin" => Some(AccessLevel::Admin),
            _ => None,
        }
    }
}

/// The actor on whose behalf an operation runs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    pub authenticated: bool,
}

impl Principal {
    pub fn user(name: impl Into<String>) -> Self {
        Self { name: name.into(), authenticated: true }
    }

    pub fn anonymous() -> Self {
        Self { name: "anonymous".into(), authenticated: false }
    }
}

/// Instance scope addressing a category by id only (`::id`).
pub fn category_id_instance(id: i64) -> String {
    format!("::{}", id)
}

/// Instance scope for a category that does not exist yet (`name::`).
pub fn category_name_instance(name: &str) -> String {
    format!("{}::", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_privilege() {
        assert!(AccessLevel::Read < AccessLevel::Add);
        assert!(AccessLevel::Add < AccessLevel::Edit);
        assert!(AccessLevel::Edit < AccessLevel::Delete);
        assert!(AccessLevel::Delete < AccessLevel::Admin);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(AccessLevel::from_str("ADMIN"), Some(AccessLevel::Admin));
        assert_eq!(AccessLevel::from_str("overview"), None);
    }
}

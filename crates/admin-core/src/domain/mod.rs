//! # Admin Core - Domain Module
//! 
//! Domain entities for the admin panel.

pub mod category;
pub mod module;
pub mod menu;
pub mod permission;
pub mod module_config;
pub mod update_check;
pub mod security;
pub mod version;
pub mod vars;

// Re-export all entities and enums
pub use category::{Category, NewCategory, CategoryPage};
pub use module::{ModuleDescriptor, ModuleKind, ModuleCategoryRow};
pub use menu::{MenuItem, MenuOption, CategoryMenu, AdminPanel, PanelView};
pub use permission::{AccessLevel, Principal};
pub use module_config::{ModuleConfig, DisplayNameStyle, ConfigFields};
pub use update_check::{UpdateCheckCache, UpdateNotice};
pub use security::{SecurityReport, DeveloperNotices, DeveloperFlag};
pub use vars::Vars;

//! Domain services (business logic)

pub mod access;
pub mod menu_service;
pub mod category_service;
pub mod config_service;
pub mod update_service;
pub mod security_service;

pub use menu_service::MenuService;
pub use category_service::{CategoryService, DeleteOutcome};
pub use config_service::{ConfigService, ConfigForm, ConfigUpdateReport, AssignmentWarning};
pub use update_service::UpdateService;
pub use security_service::SecurityService;

#[cfg(test)]
pub(crate) mod test_support;

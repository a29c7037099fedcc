//! Repository traits (ports)

pub mod category_repository;
pub mod module_registry;
pub mod config_store;
pub mod permission_oracle;
pub mod version_source;
pub mod host_environment;

pub use category_repository::CategoryRepository;
pub use module_registry::ModuleRegistry;
pub use config_store::ConfigStore;
pub use permission_oracle::PermissionOracle;
pub use version_source::VersionSource;
pub use host_environment::HostEnvironment;

#[cfg(test)]
pub use version_source::MockVersionSource;
#[cfg(test)]
pub use host_environment::MockHostEnvironment;

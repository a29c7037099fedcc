//! In-memory store adapters

pub mod category_store;
pub mod module_registry;
pub mod config_store;

pub use category_store::InMemoryCategoryStore;
pub use module_registry::InMemoryModuleRegistry;
pub use config_store::InMemoryConfigStore;

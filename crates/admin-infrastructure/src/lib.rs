//! # Admin Infrastructure
//! 
//! Adapters for the admin core ports: in-memory stores, the rule-table
//! permission oracle, the HTTP version source and local host checks.

pub mod memory;
pub mod permission;
pub mod http;
pub mod host;
pub mod seed;

pub use memory::{InMemoryCategoryStore, InMemoryModuleRegistry, InMemoryConfigStore};
pub use permission::{RuleTableOracle, RuleTableError};
pub use http::HttpVersionSource;
pub use host::LocalHostEnvironment;
pub use seed::SeededStores;

//! Host permission table adapter

pub mod rule_oracle;

pub use rule_oracle::{RuleTableOracle, RuleTableError, PermissionRule};

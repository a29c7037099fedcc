//! Checks against the local filesystem and host settings

pub mod local_environment;

pub use local_environment::LocalHostEnvironment;

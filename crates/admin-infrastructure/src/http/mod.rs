//! Outbound HTTP adapters

pub mod version_client;

pub use version_client::HttpVersionSource;

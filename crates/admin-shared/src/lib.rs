//! # Admin Shared
//! 
//! Shared configuration, telemetry, and constants for the admin panel.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;

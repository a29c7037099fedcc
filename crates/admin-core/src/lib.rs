//! # Admin Core
//! 
//! Domain entities, services, and repository traits for the admin panel:
//! category menu assembly, category lifecycle, module configuration,
//! update checks and the security snapshot.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;

//! Request guards shared by the admin routes

pub mod csrf;
pub mod principal;

pub use csrf::{csrf_guard, generate_csrf_token, validate_csrf_token};
pub use principal::CurrentPrincipal;

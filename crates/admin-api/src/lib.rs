//! # Admin API
//! 
//! HTTP handlers, middleware, response envelope and router for the admin panel.

pub mod handlers;
pub mod middleware;
pub mod error;
pub mod response;
pub mod router;
pub mod state;

pub use router::{build_router, cors_layer};
pub use state::AppState;

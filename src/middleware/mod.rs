//! Middleware del sistema
//!
//! Autenticación por bearer token y CORS.

pub mod auth;
pub mod cors;

pub use auth::{admin_auth_middleware, user_auth_middleware, AuthenticatedUser};
pub use cors::cors_layer;

//! Services module
//!
//! Lógica de negocio que no es un simple CRUD: resolución de cotizaciones,
//! emisión y validación de tokens, y métricas.

pub mod jwt_service;
pub mod metrics;
pub mod quote_service;

pub use jwt_service::JwtService;
pub use quote_service::QuoteService;

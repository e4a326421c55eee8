//! Composition crate: assembles the adapters, the HTTP layer, and the
//! observability stack into a runnable authentication service.

pub mod auth_service;
pub mod tracing;

pub use auth_service::AuthService;
pub use self::tracing::init_tracing;

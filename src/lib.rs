pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod translator;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "nl2sql-service";

// Re-export key functions for convenience
pub use app::{create_app, init_tracing};

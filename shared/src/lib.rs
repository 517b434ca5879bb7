//! Shared configuration and wire types for the storefront server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structure and stable error codes
//! - Health check response body

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DataConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, PasswordConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::HealthResponse;

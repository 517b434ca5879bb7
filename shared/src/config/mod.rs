//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and password hashing configuration
//! - `data` - Locations of the seed files loaded at startup
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod data;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use data::DataConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Seed data locations
    #[serde(default)]
    pub data: DataConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        let cors = if environment.is_production() {
            CorsConfig::default()
        } else {
            CorsConfig::development()
        };

        Self {
            environment,
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            data: DataConfig::default(),
            cors,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Checks the settings that must never reach production unchanged
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.jwt.secret.trim().is_empty() {
            return Err("JWT secret must not be empty".to_string());
        }
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT secret must be set in production".to_string());
        }
        if self.auth.jwt.access_token_expiry <= 0 {
            return Err("access token expiry must be positive".to_string());
        }
        Ok(())
    }
}

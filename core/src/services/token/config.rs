//! Configuration for the token service

use sf_shared::config::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// Issuer written into and required from every token
    pub issuer: String,
    /// Audience written into and required from every token
    pub audience: String,
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_expiry_seconds: config.access_token_expiry,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}

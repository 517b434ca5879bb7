//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used for both signing and verification
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            access_token_expiry: default_access_token_expiry(),
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor (4..=31)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }

    /// Get access token expiry in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.jwt.access_token_expiry
    }
}

fn default_secret() -> String {
    String::from(DEFAULT_SECRET)
}

fn default_access_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_issuer() -> String {
    String::from("storefront")
}

fn default_audience() -> String {
    String::from("storefront-api")
}

fn default_bcrypt_cost() -> u32 {
    10
}

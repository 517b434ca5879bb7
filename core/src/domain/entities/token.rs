//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// JWT issuer
pub const JWT_ISSUER: &str = "storefront";

/// JWT audience
pub const JWT_AUDIENCE: &str = "storefront-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Numeric user id at the time of issuance
    pub uid: u64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token issued at `issued_at`
    pub fn new_access_token(
        username: &str,
        user_id: u64,
        issued_at: DateTime<Utc>,
        lifetime_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let expiry = issued_at + Duration::seconds(lifetime_seconds);

        Self {
            sub: username.to_string(),
            uid: user_id,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// `true` once `now` has reached the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Signed access token handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Encoded JWT
    pub token: String,

    /// Lifetime in seconds
    pub expires_in: i64,
}

//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{AccessToken, Claims};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access tokens
///
/// Tokens are self-contained: there is no server-side record of issued
/// tokens, so a token stays valid until it expires.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or an internal error if the secret is empty or
    /// the lifetime is not positive
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::internal("JWT secret must not be empty"));
        }
        if config.access_token_expiry_seconds <= 0 {
            return Err(DomainError::internal("access token lifetime must be positive"));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked by `verify_at` after the signature so that a
        // forged token is never reported as merely expired.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues an access token for `user`, valid from now
    pub fn issue(&self, user: &User) -> DomainResult<AccessToken> {
        self.issue_at(user, Utc::now())
    }

    /// Issues an access token for `user` as if issued at `issued_at`
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> DomainResult<AccessToken> {
        let claims = Claims::new_access_token(
            &user.username,
            user.id,
            issued_at,
            self.config.access_token_expiry_seconds,
            &self.config.issuer,
            &self.config.audience,
        );
        let token = self.encode_jwt(&claims)?;

        tracing::debug!(username = %user.username, jti = %claims.jti, "Issued access token");

        Ok(AccessToken {
            token,
            expires_in: self.config.access_token_expiry_seconds,
        })
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token against the current time
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims; `sub` is the username
    /// * `Err(TokenError::MalformedOrForgedToken)` - Bad encoding, signature, issuer or audience
    /// * `Err(TokenError::TokenExpired)` - Authentic but past its expiry
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies an access token as of `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                DomainError::Token(TokenError::MalformedOrForgedToken)
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        Ok(claims)
    }
}

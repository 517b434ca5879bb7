//! Access gate implementation

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

const BEARER_SCHEME: &str = "bearer";

/// Pull the token out of an `Authorization` header value
///
/// Accepts both a bare token and the `Bearer <token>` form (scheme matched
/// case-insensitively). Blank values and a scheme with nothing after it
/// yield `None`.
pub fn extract_token(header: Option<&str>) -> Option<&str> {
    let value = header?.trim();
    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim_start(),
        _ if value.eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => value,
    };

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Resolves the caller of a protected operation
pub struct AccessGate {
    token_service: Arc<TokenService>,
    users: Arc<dyn UserRepository>,
}

impl AccessGate {
    pub fn new(token_service: Arc<TokenService>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            token_service,
            users,
        }
    }

    /// Authenticate a request from its `Authorization` header value
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The user the token was issued to
    /// * `Err(AuthError::NoTokenProvided)` - Header missing or blank
    /// * `Err(TokenError::MalformedOrForgedToken | TokenExpired)` - Token rejected
    /// * `Err(AuthError::UserNotFound)` - Token valid but the user no longer exists
    pub async fn authenticate(&self, authorization: Option<&str>) -> DomainResult<User> {
        let token = extract_token(authorization).ok_or(AuthError::NoTokenProvided)?;

        let claims = self.token_service.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            e
        })?;

        match self.users.find_by_username(&claims.sub).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(username = %claims.sub, "Valid token for unknown user");
                Err(AuthError::UserNotFound.into())
            }
        }
    }
}

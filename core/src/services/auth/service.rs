//! Credential verifier implementation

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::password::{hash_password, verify_password};

/// Verifies username/password pairs against the user directory
pub struct CredentialVerifier {
    /// User directory
    users: Arc<dyn UserRepository>,
    /// Hash checked when the username is unknown, so that path costs the same
    /// as a wrong password
    dummy_hash: String,
}

impl CredentialVerifier {
    /// Create a new credential verifier
    ///
    /// # Arguments
    ///
    /// * `users` - User directory to look users up in
    /// * `bcrypt_cost` - Work factor matching the stored hashes
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> DomainResult<Self> {
        let dummy_hash = hash_password("storefront-placeholder-password", bcrypt_cost)?;
        Ok(Self { users, dummy_hash })
    }

    /// Verify a username/password pair
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The matching user
    /// * `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// * `Err(DomainError::Internal)` - The directory could not be read
    pub async fn verify(&self, username: &str, password: &str) -> DomainResult<User> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = self.users.find_by_username(username).await?;
        let hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => self.dummy_hash.clone(),
        };

        let password = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

        match user {
            Some(user) if matches => {
                tracing::info!(username = %user.username, "Credentials verified");
                Ok(user)
            }
            _ => {
                tracing::warn!(username = %username, "Rejected login attempt");
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }
}

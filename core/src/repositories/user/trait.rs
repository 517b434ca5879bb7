//! User repository trait defining the interface to the user directory.
//!
//! The directory is keyed by username. Lookups are exact and case-sensitive.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for the user directory
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sf_core::repositories::UserRepository;
/// use sf_core::domain::entities::user::User;
/// use sf_core::errors::DomainError;
///
/// struct StaticDirectory;
///
/// #[async_trait]
/// impl UserRepository for StaticDirectory {
///     async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn save(&self, user: User) -> Result<User, DomainError> {
///         Ok(user)
///     }
///
///     async fn delete(&self, username: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///
///     async fn count(&self) -> Result<usize, DomainError> {
///         Ok(0)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Insert a user, or replace the record stored under the same username
    ///
    /// Replacing a user keeps the cart stored under that username.
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user and the cart it owns
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, username: &str) -> Result<bool, DomainError>;

    /// Number of registered users
    async fn count(&self) -> Result<usize, DomainError>;
}

//! User entity representing a registered shopper.

use serde::Serialize;
use std::fmt;

/// A registered user, keyed by its unique username.
///
/// The cart owned by the user lives in the cart store under the same key, so a
/// `User` value is cheap to clone and attach to a request.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Numeric identifier assigned by the registry
    pub id: u64,

    /// Unique, case-sensitive login name
    pub username: String,

    /// bcrypt hash of the user's password
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Creates a new User instance
    pub fn new(id: u64, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

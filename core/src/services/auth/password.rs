//! bcrypt helpers

use crate::errors::{DomainError, DomainResult};

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(password, cost)
        .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
}

/// Work factor encoded in a stored bcrypt hash, or `None` if it does not parse
pub fn hash_cost(hash: &str) -> Option<u32> {
    hash.parse::<bcrypt::HashParts>()
        .ok()
        .map(|parts| parts.get_cost())
}

/// Compare a plaintext password with a stored bcrypt hash
///
/// An unparsable stored hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            false
        }
    }
}

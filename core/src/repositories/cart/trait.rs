//! Cart repository trait: per-user cart storage with per-user locking.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::entities::cart::Cart;
use crate::errors::DomainError;

/// Exclusive handle on one user's cart. Other mutations of the same cart wait
/// until the guard is dropped.
pub type CartGuard = OwnedMutexGuard<Cart>;

/// Repository trait for per-user carts
///
/// Carts are keyed by the owning user's username. Each user's cart sits behind
/// its own lock, so mutations for different users never contend.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Acquire the lock on the user's cart, creating an empty cart if the user
    /// has none yet
    ///
    /// # Returns
    /// * `Ok(CartGuard)` - Exclusive access to the cart
    /// * `Err(DomainError::Auth(AuthError::UserNotFound))` - No such user
    async fn lock_cart(&self, username: &str) -> Result<CartGuard, DomainError>;

    /// Point-in-time copy of the user's cart
    async fn snapshot(&self, username: &str) -> Result<Cart, DomainError> {
        let guard = self.lock_cart(username).await?;
        Ok(guard.clone())
    }
}

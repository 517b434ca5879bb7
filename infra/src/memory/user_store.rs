//! In-memory user directory and cart store
//!
//! Each user record owns its cart through a dedicated async mutex. The
//! directory lock is only held long enough to clone that mutex handle, so cart
//! mutations for different users proceed in parallel and mutations for the
//! same user queue up in arrival order.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use sf_core::domain::entities::cart::Cart;
use sf_core::domain::entities::user::User;
use sf_core::errors::{AuthError, DomainError};
use sf_core::repositories::{CartGuard, CartRepository, UserRepository};

struct UserRecord {
    user: User,
    cart: Arc<Mutex<Cart>>,
}

impl UserRecord {
    fn new(user: User, cart: Cart) -> Self {
        Self {
            user,
            cart: Arc::new(Mutex::new(cart)),
        }
    }
}

/// User directory keyed by username
#[derive(Default)]
pub struct InMemoryUserStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from users paired with their initial carts
    ///
    /// A later record replaces an earlier one with the same username.
    pub fn from_records(records: impl IntoIterator<Item = (User, Cart)>) -> Self {
        let records = records
            .into_iter()
            .map(|(user, cart)| (user.username.clone(), UserRecord::new(user, cart)))
            .collect();

        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(username).map(|record| record.user.clone()))
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(&user.username) {
            Some(record) => record.user = user.clone(),
            None => {
                records.insert(user.username.clone(), UserRecord::new(user.clone(), Cart::new()));
            }
        }
        Ok(user)
    }

    async fn delete(&self, username: &str) -> Result<bool, DomainError> {
        let removed = self.records.write().await.remove(username).is_some();
        if removed {
            tracing::info!(username = %username, "User removed from directory");
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}

#[async_trait]
impl CartRepository for InMemoryUserStore {
    async fn lock_cart(&self, username: &str) -> Result<CartGuard, DomainError> {
        let cart = {
            let records = self.records.read().await;
            records
                .get(username)
                .map(|record| Arc::clone(&record.cart))
                .ok_or(AuthError::UserNotFound)?
        };

        Ok(cart.lock_owned().await)
    }
}

//! Mock repository implementations for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::cart::Cart;
use crate::domain::entities::catalog::{Brand, Product};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::{CartGuard, CartRepository, CatalogRepository, UserRepository};

/// Mock user directory that also stores carts
pub struct MockUserRepository {
    users: Mutex<HashMap<String, User>>,
    carts: Mutex<HashMap<String, Arc<tokio::sync::Mutex<Cart>>>>,
    fail_lookups: AtomicBool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            carts: Mutex::new(HashMap::new()),
            fail_lookups: AtomicBool::new(false),
        }
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.insert(user);
        }
        repo
    }

    pub fn insert(&self, user: User) {
        self.carts
            .lock()
            .unwrap()
            .entry(user.username.clone())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(Cart::new())));
        self.users.lock().unwrap().insert(user.username.clone(), user);
    }

    /// Make every subsequent lookup fail with an internal error
    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::internal("user store unavailable"));
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        Ok(self.users.lock().unwrap().get(username).cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        self.insert(user.clone());
        Ok(user)
    }

    async fn delete(&self, username: &str) -> Result<bool, DomainError> {
        self.carts.lock().unwrap().remove(username);
        Ok(self.users.lock().unwrap().remove(username).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.lock().unwrap().len())
    }
}

#[async_trait]
impl CartRepository for MockUserRepository {
    async fn lock_cart(&self, username: &str) -> Result<CartGuard, DomainError> {
        self.check_available()?;
        let cart = self
            .carts
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or(AuthError::UserNotFound)?;
        Ok(cart.lock_owned().await)
    }
}

/// Mock catalog backed by fixed vectors
pub struct MockCatalogRepository {
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn list_brands(&self) -> Result<Vec<Brand>, DomainError> {
        Ok(self.brands.clone())
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.clone())
    }
}

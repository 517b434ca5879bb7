//! Cart service implementation

use std::sync::Arc;

use crate::domain::entities::cart::{Cart, ItemId, LineItem};
use crate::errors::DomainResult;
use crate::repositories::CartRepository;

/// Cart operations for authenticated users
pub struct CartService {
    carts: Arc<dyn CartRepository>,
}

impl CartService {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    /// Current contents of the user's cart
    pub async fn get(&self, username: &str) -> DomainResult<Cart> {
        self.carts.snapshot(username).await
    }

    /// Add an item to the user's cart, merging with an entry of the same id
    ///
    /// Returns the full cart after the change.
    pub async fn add(&self, username: &str, item: LineItem) -> DomainResult<Cart> {
        let item_id = item.id;
        let quantity = item.quantity;

        let cart = self
            .mutate(username, |cart| cart.add(item).map(|_| ()))
            .await?;

        tracing::info!(username = %username, item_id, quantity, "Item added to cart");
        Ok(cart)
    }

    /// Remove the entry with `item_id` from the user's cart
    ///
    /// Returns the full cart after the change. A missing id fails with
    /// `CartError::ItemNotFound` and leaves the cart as it was.
    pub async fn remove(&self, username: &str, item_id: ItemId) -> DomainResult<Cart> {
        let cart = self
            .mutate(username, |cart| cart.remove(item_id).map(|_| ()))
            .await?;

        tracing::info!(username = %username, item_id, "Item removed from cart");
        Ok(cart)
    }

    /// Run `change` on a copy of the cart while holding its lock and store the
    /// copy only if the change succeeded
    async fn mutate<F>(&self, username: &str, change: F) -> DomainResult<Cart>
    where
        F: FnOnce(&mut Cart) -> DomainResult<()>,
    {
        let mut guard = self.carts.lock_cart(username).await?;

        let mut working = guard.clone();
        change(&mut working)?;
        *guard = working.clone();

        Ok(working)
    }
}

//! Cart entity: an ordered collection of line items keyed by item id.

use serde::{Deserialize, Serialize};

use crate::errors::{CartError, DomainError, ValidationError};

/// Externally assigned, stable item identifier
pub type ItemId = u64;

/// One entry in a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price, never negative
    #[serde(default)]
    pub price: f64,
    /// Always at least 1 while the item is in a cart
    pub quantity: u32,
}

impl LineItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Checks the per-item invariants (positive quantity, non-negative finite price)
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity == 0 {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: "1".to_string(),
                max: u32::MAX.to_string(),
            });
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
            });
        }
        Ok(())
    }
}

/// A user's cart.
///
/// Holds at most one line item per id; adding an id that is already present
/// accumulates quantity instead of appending. Every mutation either fully
/// applies or leaves the cart untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw items, merging duplicate ids in arrival order
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Result<Self, DomainError> {
        let mut cart = Self::new();
        for item in items {
            cart.add(item)?;
        }
        Ok(cart)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds `candidate` to the cart.
    ///
    /// An existing entry with the same id only has its quantity increased; its
    /// name, description and price are kept. Otherwise the candidate is
    /// appended.
    pub fn add(&mut self, candidate: LineItem) -> Result<&LineItem, DomainError> {
        candidate.validate()?;

        match self.items.iter().position(|item| item.id == candidate.id) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity = existing
                    .quantity
                    .checked_add(candidate.quantity)
                    .ok_or_else(|| ValidationError::OutOfRange {
                        field: "quantity".to_string(),
                        min: "1".to_string(),
                        max: u32::MAX.to_string(),
                    })?;
                Ok(&self.items[index])
            }
            None => {
                self.items.push(candidate);
                Ok(&self.items[self.items.len() - 1])
            }
        }
    }

    /// Removes the entry with `id`, returning it
    pub fn remove(&mut self, id: ItemId) -> Result<LineItem, DomainError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::ItemNotFound { item_id: id })?;
        Ok(self.items.remove(index))
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use sf_core::domain::entities::cart::{Cart, ItemId, LineItem};

/// Body of `POST /cart`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[serde(rename = "newItem")]
    #[validate(nested)]
    pub new_item: NewItem,
}

/// Candidate line item as sent by the client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewItem {
    pub id: ItemId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
}

impl From<NewItem> for LineItem {
    fn from(item: NewItem) -> Self {
        LineItem::new(item.id, item.name, item.description, item.price, item.quantity)
    }
}

/// Response of the cart mutations
#[derive(Debug, Clone, Serialize)]
pub struct CartMutationResponse {
    pub message: String,
    pub cart: Cart,
}

impl CartMutationResponse {
    pub fn new(message: impl Into<String>, cart: Cart) -> Self {
        Self {
            message: message.into(),
            cart,
        }
    }
}

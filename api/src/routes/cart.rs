//! Cart endpoints
//!
//! All handlers take the [`AuthenticatedUser`] first, so an unauthorized
//! request is rejected before its body is read and before any mutation.

use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::domain::entities::cart::{ItemId, LineItem};

use crate::dto::{AddToCartRequest, CartMutationResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Handler for GET /cart
///
/// Responds with the caller's cart as a JSON array of line items.
pub async fn get_cart(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let cart = state.carts.get(&user.username).await?;
    Ok(HttpResponse::Ok().json(cart))
}

/// Handler for POST /cart
///
/// Body: `{"newItem": {"id", "name", "description", "price", "quantity"}}`.
/// An item whose id is already in the cart only increases that entry's
/// quantity.
pub async fn add_to_cart(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
    request: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let cart = state
        .carts
        .add(&user.username, LineItem::from(request.new_item))
        .await?;

    Ok(HttpResponse::Ok().json(CartMutationResponse::new("Item added to cart", cart)))
}

/// Handler for DELETE /cart/{itemId}
pub async fn remove_from_cart(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
    item_id: web::Path<ItemId>,
) -> Result<HttpResponse, ApiError> {
    let cart = state
        .carts
        .remove(&user.username, item_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CartMutationResponse::new("Item removed from cart", cart)))
}

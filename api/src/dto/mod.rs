//! Request and response bodies

pub mod auth;
pub mod cart;
pub mod catalog;

pub use auth::{LoginRequest, LoginResponse};
pub use cart::{AddToCartRequest, CartMutationResponse, NewItem};
pub use catalog::ProductQuery;

//! Domain entities representing core business objects.

pub mod cart;
pub mod catalog;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use cart::{Cart, ItemId, LineItem};
pub use catalog::{Brand, Product};
pub use token::{AccessToken, Claims, ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER};
pub use user::User;

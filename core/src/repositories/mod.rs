pub mod cart;
pub mod catalog;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use cart::{CartGuard, CartRepository};
pub use catalog::CatalogRepository;
pub use user::UserRepository;

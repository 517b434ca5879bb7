//! Cart service module
//!
//! Read and mutate a user's cart. Mutations on the same cart are serialized
//! through the repository's per-user lock.

mod service;


pub use service::CartService;

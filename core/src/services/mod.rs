//! Business services containing domain logic and use cases.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod gate;
pub mod token;

// Re-export commonly used types
pub use auth::{hash_cost, hash_password, verify_password, CredentialVerifier};
pub use cart::CartService;
pub use catalog::CatalogService;
pub use gate::{extract_token, AccessGate};
pub use token::{TokenService, TokenServiceConfig};

//! Seed data loading
//!
//! Reads the user registry and the catalog from JSON files. User entries carry
//! either a plaintext `password`, hashed here at load time, or a ready bcrypt
//! `passwordHash`, plus an optional initial `cart`.

mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use error::SeedError;
pub use loader::{load_seed_data, parse_catalog, parse_users, SeedData};

//! Process-local stores
//!
//! State lives for the lifetime of the process and is rebuilt from seed data
//! on every start.

pub mod catalog_store;
pub mod user_store;

#[cfg(test)]
mod tests;

pub use catalog_store::InMemoryCatalogStore;
pub use user_store::InMemoryUserStore;

//! # Infrastructure Layer
//!
//! Concrete storage behind the repository traits of `sf_core`.
//!
//! ## Architecture
//!
//! - **Memory**: process-local user directory, cart store and catalog
//! - **Seed**: JSON fixtures loaded into the stores at startup

use std::sync::Arc;

use sf_shared::config::DataConfig;

pub mod memory;
pub mod seed;

pub use memory::{InMemoryCatalogStore, InMemoryUserStore};
pub use seed::{load_seed_data, SeedData, SeedError};

/// Store container handed to the API layer
#[derive(Clone)]
pub struct InfrastructureServices {
    /// User directory, also holding each user's cart
    pub users: Arc<InMemoryUserStore>,
    /// Brand and product lists
    pub catalog: Arc<InMemoryCatalogStore>,
}

impl InfrastructureServices {
    /// Build the stores from already loaded seed data
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::from_records(seed.users)),
            catalog: Arc::new(InMemoryCatalogStore::new(seed.brands, seed.products)),
        }
    }
}

/// Load the seed files and build the stores
pub fn initialize(
    data: &DataConfig,
    bcrypt_cost: u32,
) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let seed = load_seed_data(data, bcrypt_cost)?;
    tracing::info!(
        users = seed.users.len(),
        brands = seed.brands.len(),
        products = seed.products.len(),
        "Seed data loaded"
    );

    Ok(InfrastructureServices::from_seed(seed))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Seed data could not be loaded
    #[error("Seed data error: {0}")]
    Seed(#[from] SeedError),
}

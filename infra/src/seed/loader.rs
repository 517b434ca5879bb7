//! JSON seed file parsing

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use sf_core::domain::entities::cart::{Cart, LineItem};
use sf_core::domain::entities::catalog::{Brand, Product};
use sf_core::domain::entities::user::User;
use sf_core::services::{hash_cost, hash_password};
use sf_shared::config::DataConfig;

use super::error::SeedError;

/// Everything the stores are built from
#[derive(Debug, Default)]
pub struct SeedData {
    pub users: Vec<(User, Cart)>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserSeed {
    #[serde(default)]
    id: Option<u64>,
    username: String,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    password_hash: Option<String>,
    #[serde(default)]
    cart: Vec<LineItem>,
}

/// Load users, brands and products from the configured files
pub fn load_seed_data(config: &DataConfig, bcrypt_cost: u32) -> Result<SeedData, SeedError> {
    let users = parse_users(&read(&config.users_path)?, bcrypt_cost)?;
    let brands = parse_catalog(&read(&config.brands_path)?, "brands")?;
    let products = parse_catalog(&read(&config.products_path)?, "products")?;

    Ok(SeedData {
        users,
        brands,
        products,
    })
}

/// Parse a user registry document
///
/// Users without an explicit id are numbered by their position, starting at 1.
/// A precomputed `passwordHash` must use `bcrypt_cost`, the same work factor
/// the credential verifier's unknown-user hash is built with.
pub fn parse_users(json: &str, bcrypt_cost: u32) -> Result<Vec<(User, Cart)>, SeedError> {
    let seeds: Vec<UserSeed> = serde_json::from_str(json).map_err(|source| SeedError::Parse {
        what: "users".to_string(),
        source,
    })?;

    let mut seen = HashSet::new();
    let mut users = Vec::with_capacity(seeds.len());

    for (index, seed) in seeds.into_iter().enumerate() {
        if !seen.insert(seed.username.clone()) {
            return Err(SeedError::DuplicateUsername(seed.username));
        }

        let password_hash = match (seed.password_hash, seed.password) {
            (Some(hash), _) => match hash_cost(&hash) {
                Some(found) if found == bcrypt_cost => hash,
                Some(found) => {
                    return Err(SeedError::PasswordHashCost {
                        username: seed.username,
                        expected: bcrypt_cost,
                        found,
                    })
                }
                None => return Err(SeedError::InvalidPasswordHash(seed.username)),
            },
            (None, Some(password)) => {
                hash_password(&password, bcrypt_cost).map_err(|source| SeedError::Hash {
                    username: seed.username.clone(),
                    source,
                })?
            }
            (None, None) => return Err(SeedError::MissingPassword(seed.username)),
        };

        let cart = Cart::from_items(seed.cart).map_err(|source| SeedError::InvalidCart {
            username: seed.username.clone(),
            source,
        })?;

        let id = seed.id.unwrap_or(index as u64 + 1);
        users.push((User::new(id, seed.username, password_hash), cart));
    }

    Ok(users)
}

/// Parse a brand or product list
pub fn parse_catalog<T: DeserializeOwned>(json: &str, what: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError::Parse {
        what: what.to_string(),
        source,
    })
}

fn read(path: &Path) -> Result<String, SeedError> {
    tracing::debug!(path = %path.display(), "Reading seed file");
    fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })
}

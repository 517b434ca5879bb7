//! Seed data locations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths of the JSON files loaded into the in-memory stores at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// User registry
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,

    /// Brand list
    #[serde(default = "default_brands_path")]
    pub brands_path: PathBuf,

    /// Product list
    #[serde(default = "default_products_path")]
    pub products_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            brands_path: default_brands_path(),
            products_path: default_products_path(),
        }
    }
}

impl DataConfig {
    /// All three files inside one directory
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            users_path: dir.join("users.json"),
            brands_path: dir.join("brands.json"),
            products_path: dir.join("products.json"),
        }
    }
}

fn default_users_path() -> PathBuf {
    PathBuf::from("data/users.json")
}

fn default_brands_path() -> PathBuf {
    PathBuf::from("data/brands.json")
}

fn default_products_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

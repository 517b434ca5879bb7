//! Catalog repository trait for the read-only brand and product lists.

use async_trait::async_trait;

use crate::domain::entities::catalog::{Brand, Product};
use crate::errors::DomainError;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All brands in catalog order
    async fn list_brands(&self) -> Result<Vec<Brand>, DomainError>;

    /// All products in catalog order
    async fn list_products(&self) -> Result<Vec<Product>, DomainError>;

    /// Products whose brand id equals `brand_id`
    async fn find_products_by_brand(&self, brand_id: &str) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .list_products()
            .await?
            .into_iter()
            .filter(|p| p.belongs_to(brand_id))
            .collect())
    }
}

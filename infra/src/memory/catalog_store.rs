//! In-memory catalog

use async_trait::async_trait;

use sf_core::domain::entities::catalog::{Brand, Product};
use sf_core::errors::DomainError;
use sf_core::repositories::CatalogRepository;

/// Fixed brand and product lists, kept in load order
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    brands: Vec<Brand>,
    products: Vec<Product>,
}

impl InMemoryCatalogStore {
    pub fn new(brands: Vec<Brand>, products: Vec<Product>) -> Self {
        Self { brands, products }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogStore {
    async fn list_brands(&self) -> Result<Vec<Brand>, DomainError> {
        Ok(self.brands.clone())
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.clone())
    }

    async fn find_products_by_brand(&self, brand_id: &str) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .products
            .iter()
            .filter(|product| product.belongs_to(brand_id))
            .cloned()
            .collect())
    }
}

//! Catalog service implementation

use std::sync::Arc;

use crate::domain::entities::catalog::{Brand, Product};
use crate::errors::DomainResult;
use crate::repositories::CatalogRepository;

/// Read-only brand and product listings
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn brands(&self) -> DomainResult<Vec<Brand>> {
        self.catalog.list_brands().await
    }

    /// Products, optionally restricted to one brand
    ///
    /// An unknown brand id yields an empty list.
    pub async fn products(&self, brand_id: Option<&str>) -> DomainResult<Vec<Product>> {
        match brand_id {
            Some(brand_id) => self.catalog.find_products_by_brand(brand_id).await,
            None => self.catalog.list_products().await,
        }
    }
}

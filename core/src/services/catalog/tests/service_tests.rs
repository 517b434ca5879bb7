//! Unit tests for the catalog service

use std::sync::Arc;

use crate::domain::entities::catalog::{Brand, Product};
use crate::repositories::mock::MockCatalogRepository;
use crate::services::catalog::CatalogService;

fn product(id: &str, brand_id: &str) -> Product {
    Product {
        id: id.to_string(),
        brand_id: brand_id.to_string(),
        name: format!("Product {}", id),
        description: String::new(),
        price: 10.0,
        image_urls: Vec::new(),
    }
}

fn setup() -> CatalogService {
    let repo = MockCatalogRepository {
        brands: vec![
            Brand {
                id: "1".to_string(),
                name: "Oakley".to_string(),
            },
            Brand {
                id: "2".to_string(),
                name: "Ray Ban".to_string(),
            },
        ],
        products: vec![product("1", "1"), product("2", "2"), product("3", "1")],
    };
    CatalogService::new(Arc::new(repo))
}

#[tokio::test]
async fn test_brands_in_catalog_order() {
    let brands = setup().brands().await.unwrap();
    let names: Vec<&str> = brands.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Oakley", "Ray Ban"]);
}

#[tokio::test]
async fn test_products_without_filter() {
    let products = setup().products(None).await.unwrap();
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_products_filtered_by_brand() {
    let products = setup().products(Some("1")).await.unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn test_unknown_brand_yields_empty_list() {
    let products = setup().products(Some("99")).await.unwrap();
    assert!(products.is_empty());
}

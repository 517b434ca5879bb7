//! Tests for the in-memory catalog

use sf_core::domain::entities::catalog::{Brand, Product};
use sf_core::repositories::CatalogRepository;

use crate::memory::InMemoryCatalogStore;

fn product(id: &str, brand_id: &str) -> Product {
    Product {
        id: id.to_string(),
        brand_id: brand_id.to_string(),
        name: format!("Frame {}", id),
        description: String::new(),
        price: 100.0,
        image_urls: vec![],
    }
}

fn store() -> InMemoryCatalogStore {
    InMemoryCatalogStore::new(
        vec![Brand {
            id: "1".to_string(),
            name: "Oakley".to_string(),
        }],
        vec![product("1", "1"), product("2", "2"), product("3", "1")],
    )
}

#[tokio::test]
async fn test_lists_in_load_order() {
    let store = store();

    assert_eq!(store.list_brands().await.unwrap().len(), 1);
    let ids: Vec<String> = store
        .list_products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_filter_by_brand() {
    let store = store();

    let products = store.find_products_by_brand("1").await.unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.brand_id == "1"));
    assert!(store.find_products_by_brand("7").await.unwrap().is_empty());
}

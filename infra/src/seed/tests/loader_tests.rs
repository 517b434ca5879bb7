//! Tests for seed data loading

use std::fs;

use sf_core::domain::entities::catalog::{Brand, Product};
use sf_core::services::{hash_password, verify_password};
use sf_shared::config::DataConfig;

use crate::seed::{load_seed_data, parse_catalog, parse_users, SeedError};

const TEST_COST: u32 = 4;

#[test]
fn test_plaintext_passwords_are_hashed() {
    let users = parse_users(r#"[{"username": "alice", "password": "p1"}]"#, TEST_COST).unwrap();

    let (user, cart) = &users[0];
    assert_eq!(user.id, 1);
    assert_ne!(user.password_hash, "p1");
    assert!(verify_password("p1", &user.password_hash));
    assert!(cart.is_empty());
}

#[test]
fn test_precomputed_hash_is_kept() {
    let hash = hash_password("p2", TEST_COST).unwrap();
    let json = format!(r#"[{{"id": 7, "username": "bob", "passwordHash": "{}"}}]"#, hash);

    let users = parse_users(&json, TEST_COST).unwrap();

    assert_eq!(users[0].0.id, 7);
    assert_eq!(users[0].0.password_hash, hash);
    assert!(verify_password("p2", &users[0].0.password_hash));
}

#[test]
fn test_precomputed_hash_with_other_cost_is_rejected() {
    let hash = hash_password("p2", TEST_COST + 1).unwrap();
    let json = format!(r#"[{{"username": "bob", "passwordHash": "{}"}}]"#, hash);

    let result = parse_users(&json, TEST_COST);
    assert!(matches!(
        result,
        Err(SeedError::PasswordHashCost { ref username, expected: 4, found: 5 }) if username == "bob"
    ));
}

#[test]
fn test_unparsable_precomputed_hash_is_rejected() {
    let result = parse_users(
        r#"[{"username": "bob", "passwordHash": "$2b$04$abcdefghijklmnopqrstuu"}]"#,
        TEST_COST,
    );
    assert!(matches!(result, Err(SeedError::InvalidPasswordHash(ref name)) if name == "bob"));
}

#[test]
fn test_initial_cart_is_loaded() {
    let json = r#"[{
        "username": "yellowleopard753",
        "password": "jonjon",
        "cart": [
            {"id": 1, "name": "Superglasses", "description": "The best glasses", "price": 150, "quantity": 1},
            {"id": 1, "name": "Superglasses", "price": 150, "quantity": 2}
        ]
    }]"#;

    let users = parse_users(json, TEST_COST).unwrap();
    let cart = &users[0].1;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(1).unwrap().quantity, 3);
    assert_eq!(cart.get(1).unwrap().description, "The best glasses");
}

#[test]
fn test_duplicate_username_is_rejected() {
    let json = r#"[
        {"username": "alice", "password": "p1"},
        {"username": "alice", "password": "p2"}
    ]"#;

    let result = parse_users(json, TEST_COST);
    assert!(matches!(result, Err(SeedError::DuplicateUsername(name)) if name == "alice"));
}

#[test]
fn test_missing_password_is_rejected() {
    let result = parse_users(r#"[{"username": "alice"}]"#, TEST_COST);
    assert!(matches!(result, Err(SeedError::MissingPassword(_))));
}

#[test]
fn test_invalid_cart_item_is_rejected() {
    let json = r#"[{"username": "alice", "password": "p1",
        "cart": [{"id": 1, "price": 10, "quantity": 0}]}]"#;

    let result = parse_users(json, TEST_COST);
    assert!(matches!(result, Err(SeedError::InvalidCart { .. })));
}

#[test]
fn test_catalog_parsing() {
    let brands: Vec<Brand> = parse_catalog(r#"[{"id": "1", "name": "Oakley"}]"#, "brands").unwrap();
    assert_eq!(brands[0].name, "Oakley");

    let products: Vec<Product> = parse_catalog(
        r#"[{"id": "1", "brandId": "1", "name": "Sun", "price": 150, "imageUrls": ["a.png"]}]"#,
        "products",
    )
    .unwrap();
    assert_eq!(products[0].brand_id, "1");
    assert_eq!(products[0].image_urls, vec!["a.png"]);

    let result: Result<Vec<Brand>, _> = parse_catalog("{not json", "brands");
    assert!(matches!(result, Err(SeedError::Parse { .. })));
}

#[test]
fn test_load_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("users.json"),
        r#"[{"username": "alice", "password": "p1"}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("brands.json"), r#"[{"id": "1", "name": "Oakley"}]"#).unwrap();
    fs::write(dir.path().join("products.json"), "[]").unwrap();

    let seed = load_seed_data(&DataConfig::from_dir(dir.path()), TEST_COST).unwrap();
    assert_eq!(seed.users.len(), 1);
    assert_eq!(seed.brands.len(), 1);
    assert!(seed.products.is_empty());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_seed_data(&DataConfig::from_dir(dir.path()), TEST_COST);
    assert!(matches!(result, Err(SeedError::Read { .. })));
}

//! Shared fixtures for the API integration tests
#![allow(dead_code)]

use actix_web::web;
use chrono::{DateTime, Utc};

use sf_api::AppState;
use sf_core::domain::entities::user::User;
use sf_infra::seed::{parse_catalog, parse_users, SeedData};
use sf_infra::InfrastructureServices;
use sf_shared::config::{AppConfig, Environment};

pub const TEST_SECRET: &str = "integration-test-secret";

const USERS: &str = r#"[
    {
        "id": 1,
        "username": "yellowleopard753",
        "password": "jonjon",
        "cart": [
            {"id": 1, "name": "Superglasses", "description": "The best glasses in the world", "price": 150, "quantity": 1}
        ]
    },
    {"id": 2, "username": "alice", "password": "p1"}
]"#;

const BRANDS: &str = r#"[
    {"id": "1", "name": "Oakley"},
    {"id": "2", "name": "Ray Ban"}
]"#;

const PRODUCTS: &str = r#"[
    {"id": "1", "brandId": "1", "name": "Superglasses", "description": "The best glasses in the world", "price": 150, "imageUrls": []},
    {"id": "2", "brandId": "1", "name": "Black Sunglasses", "description": "The best glasses in the world", "price": 100, "imageUrls": []},
    {"id": "3", "brandId": "2", "name": "Brown Sunglasses", "description": "The best glasses in the world", "price": 50, "imageUrls": []}
]"#;

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub infra: InfrastructureServices,
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = AppConfig::for_environment(Environment::Development);
        config.auth.jwt.secret = TEST_SECRET.to_string();
        config.auth.password.bcrypt_cost = 4;

        let seed = SeedData {
            users: parse_users(USERS, config.auth.password.bcrypt_cost).unwrap(),
            brands: parse_catalog(BRANDS, "brands").unwrap(),
            products: parse_catalog(PRODUCTS, "products").unwrap(),
        };
        let infra = InfrastructureServices::from_seed(seed);
        let state = web::Data::new(AppState::new(config, &infra).unwrap());

        Self { state, infra }
    }

    /// Token for a user as issued now
    pub fn token_for(&self, id: u64, username: &str) -> String {
        self.state
            .tokens
            .issue(&User::new(id, username, "unused"))
            .unwrap()
            .token
    }

    /// Token for a user as issued at `issued_at`
    pub fn token_issued_at(&self, id: u64, username: &str, issued_at: DateTime<Utc>) -> String {
        self.state
            .tokens
            .issue_at(&User::new(id, username, "unused"), issued_at)
            .unwrap()
            .token
    }
}

//! # Storefront API
//!
//! actix-web surface of the storefront backend: login, cart, catalog and
//! operational endpoints.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;

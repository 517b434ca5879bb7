//! Token service module for JWT management
//!
//! Issues HS256-signed access tokens binding a username to a one hour
//! lifetime, and verifies them statelessly.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;

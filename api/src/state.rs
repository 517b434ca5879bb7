//! Shared application state

use std::sync::Arc;

use sf_core::errors::DomainResult;
use sf_core::services::{
    AccessGate, CartService, CatalogService, CredentialVerifier, TokenService, TokenServiceConfig,
};
use sf_infra::InfrastructureServices;
use sf_shared::config::AppConfig;

/// Services shared by every worker
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: Arc<CredentialVerifier>,
    pub tokens: Arc<TokenService>,
    pub gate: Arc<AccessGate>,
    pub carts: Arc<CartService>,
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    /// Wire the services on top of the given stores
    pub fn new(config: AppConfig, infra: &InfrastructureServices) -> DomainResult<Self> {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt))?);
        let credentials = Arc::new(CredentialVerifier::new(
            infra.users.clone(),
            config.auth.password.bcrypt_cost,
        )?);
        let gate = Arc::new(AccessGate::new(tokens.clone(), infra.users.clone()));
        let carts = Arc::new(CartService::new(infra.users.clone()));
        let catalog = Arc::new(CatalogService::new(infra.catalog.clone()));

        Ok(Self {
            config: Arc::new(config),
            credentials,
            tokens,
            gate,
            carts,
            catalog,
        })
    }
}

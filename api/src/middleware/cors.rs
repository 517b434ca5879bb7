//! CORS middleware built from configuration.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use sf_shared::config::CorsConfig;

/// Creates the CORS middleware for the configured origins.
///
/// An origin entry of `"*"` allows any origin. Method names that do not parse
/// are skipped with a warning.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|name| match name.parse::<Method>() {
            Ok(method) => Some(method),
            Err(_) => {
                tracing::warn!(method = %name, "Ignoring unknown CORS method");
                None
            }
        })
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().filter(|o| !o.is_empty()) {
            tracing::info!(origin = %origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

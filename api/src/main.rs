use actix_web::{web, HttpServer};
use anyhow::Context;

use sf_api::{config, create_app, telemetry, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting storefront API server");

    let infra = sf_infra::initialize(&config.data, config.auth.password.bcrypt_cost)
        .context("Failed to initialize stores")?;

    let server_config = config.server.clone();
    let bind_address = server_config.bind_address();
    let state = web::Data::new(
        AppState::new(config, &infra).context("Failed to initialize services")?,
    );

    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()))
        .keep_alive(std::time::Duration::from_secs(server_config.keep_alive));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with error")?;

    Ok(())
}

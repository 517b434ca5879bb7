//! Configuration loading
//!
//! Layers, lowest precedence first:
//! 1. built-in defaults for the active environment
//! 2. the optional `config.<environment>.toml` file
//! 3. `STOREFRONT__SECTION__KEY` environment variables
//! 4. the conventional `JWT_SECRET`, `HOST` and `PORT` variables

use config::{Config as Settings, Environment as EnvironmentSource, File};
use sf_shared::config::{AppConfig, Environment};

/// Prefix for structured environment overrides
const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load the application configuration from files and the process environment
pub fn load() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    let mut config = load_layers(environment)?;
    apply_overrides(&mut config, |name| std::env::var(name).ok())?;
    config.validate().map_err(ConfigError::Invalid)?;

    Ok(config)
}

/// Merge defaults, the environment file and `STOREFRONT__*` variables
pub fn load_layers(environment: Environment) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::for_environment(environment);

    let settings = Settings::builder()
        .add_source(Settings::try_from(&defaults)?)
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(
            EnvironmentSource::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Apply the unprefixed variables the deployment tooling sets
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(secret) = lookup("JWT_SECRET") {
        config.auth.jwt.secret = secret;
    }

    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }

    if let Some(port) = lookup("PORT") {
        config.server.port = port.parse().map_err(|_| ConfigError::InvalidVar {
            name: "PORT".to_string(),
            value: port.clone(),
        })?;
    }

    Ok(())
}

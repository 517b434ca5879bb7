use std::path::PathBuf;

use sf_core::errors::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate username in seed data: {0}")]
    DuplicateUsername(String),

    #[error("User {0} has neither password nor passwordHash")]
    MissingPassword(String),

    #[error("User {0} has a passwordHash that is not a bcrypt hash")]
    InvalidPasswordHash(String),

    #[error("User {username} has a passwordHash with cost {found}, expected {expected}")]
    PasswordHashCost {
        username: String,
        expected: u32,
        found: u32,
    },

    #[error("Invalid initial cart for user {username}: {source}")]
    InvalidCart {
        username: String,
        #[source]
        source: DomainError,
    },

    #[error("Failed to hash password for user {username}: {source}")]
    Hash {
        username: String,
        #[source]
        source: DomainError,
    },
}

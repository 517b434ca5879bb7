//! Error type definitions for authentication, tokens, carts and input validation
//!
//! The caller-facing wording lives in the presentation layer; the messages here
//! are for logs.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately carries no detail.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No token provided")]
    NoTokenProvided,

    /// The token's subject no longer resolves to a user
    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed or forged token")]
    MalformedOrForgedToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Cart-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Item {item_id} not found in cart")]
    ItemNotFound { item_id: u64 },
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

//! Mapping from domain errors to HTTP responses
//!
//! Every failure leaves the server as an `ErrorResponse` body. Internal faults
//! are logged in full and reported with a generic message.

use std::collections::HashMap;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::Value;
use validator::{ValidationErrors, ValidationErrorsKind};

use sf_core::errors::{AuthError, CartError, DomainError, TokenError};
use sf_shared::errors::{error_codes, ErrorResponse};

/// Error type returned by every handler and extractor
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body, path or query rejected before reaching a service
    #[error("{message}")]
    InvalidInput {
        message: String,
        details: HashMap<String, Value>,
    },
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Status, stable error code and caller-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        let error = match self {
            ApiError::InvalidInput { message, .. } => {
                return (
                    StatusCode::BAD_REQUEST,
                    error_codes::INVALID_INPUT,
                    message.clone(),
                )
            }
            ApiError::Domain(error) => error,
        };

        match error {
            DomainError::Auth(AuthError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_CREDENTIALS,
                "Invalid credentials".to_string(),
            ),
            DomainError::Auth(AuthError::NoTokenProvided) => (
                StatusCode::UNAUTHORIZED,
                error_codes::NO_TOKEN_PROVIDED,
                "No token provided".to_string(),
            ),
            DomainError::Auth(AuthError::UserNotFound) => (
                StatusCode::NOT_FOUND,
                error_codes::USER_NOT_FOUND,
                "User not found".to_string(),
            ),
            DomainError::Token(TokenError::MalformedOrForgedToken) => (
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_INVALID,
                "Invalid or expired token".to_string(),
            ),
            DomainError::Token(TokenError::TokenExpired) => (
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_EXPIRED,
                "Invalid or expired token".to_string(),
            ),
            DomainError::Cart(CartError::ItemNotFound { .. }) => (
                StatusCode::NOT_FOUND,
                error_codes::ITEM_NOT_FOUND,
                "Item not found in cart".to_string(),
            ),
            DomainError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                error_codes::NOT_FOUND,
                format!("{} not found", resource),
            ),
            DomainError::ValidationErr(validation) => (
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_INPUT,
                validation.to_string(),
            ),
            DomainError::Token(TokenError::TokenGenerationFailed) | DomainError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }

    fn body(&self) -> ErrorResponse {
        let (_, code, message) = self.parts();
        let response = ErrorResponse::new(code, message);

        match self {
            ApiError::InvalidInput { details, .. } => {
                details.iter().fold(response, |response, (key, value)| {
                    response.add_detail(key.clone(), value)
                })
            }
            ApiError::Domain(DomainError::Cart(CartError::ItemNotFound { item_id })) => {
                response.add_detail("itemId", item_id)
            }
            ApiError::Domain(DomainError::ValidationErr(validation)) => {
                response.add_detail("field", validation.field())
            }
            _ => response,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed with internal error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        HttpResponse::build(status).json(self.body())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = HashMap::new();
        collect_field_errors("", &errors, &mut details);

        ApiError::InvalidInput {
            message: "Invalid request body".to_string(),
            details,
        }
    }
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut HashMap<String, Value>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.insert(path, Value::from(messages));
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::invalid_input(format!("Invalid request body: {}", err)).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::invalid_input(format!("Invalid path parameter: {}", err)).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::invalid_input(format!("Invalid query string: {}", err)).into()
}

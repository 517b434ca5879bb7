//! Authorization extractor for protected routes.
//!
//! Handlers that take an [`AuthenticatedUser`] argument only run once the
//! request's `Authorization` header has passed the access gate. The resolved
//! user is cached in the request extensions, so extracting it again in the
//! same request neither re-verifies the token nor re-reads the directory.

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use std::ops::Deref;

use sf_core::domain::entities::user::User;
use sf_core::errors::{DomainError, TokenError};

use crate::handlers::ApiError;
use crate::state::AppState;

/// The user a request is authorized as
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(cached) = req.extensions().get::<AuthenticatedUser>().cloned() {
            return Box::pin(async move { Ok(cached) });
        }

        let req = req.clone();
        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| DomainError::internal("application state not registered"))?;

            let header = match req.headers().get(AUTHORIZATION) {
                Some(value) => Some(
                    value
                        .to_str()
                        .map_err(|_| DomainError::from(TokenError::MalformedOrForgedToken))?
                        .to_owned(),
                ),
                None => None,
            };

            let user = AuthenticatedUser(state.gate.authenticate(header.as_deref()).await?);
            req.extensions_mut().insert(user.clone());

            Ok(user)
        })
    }
}

//! Login endpoint

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /login
///
/// Exchanges a username and password for an access token.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "p1" }
/// ```
///
/// # Response
///
/// * `200 {"token": "...", "expiresIn": 3600}`
/// * `401 {"message": "Invalid credentials"}` for an unknown user or wrong password
/// * `400` when either field is missing or empty
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .credentials
        .verify(&request.username, &request.password)
        .await?;
    let token = state.tokens.issue(&user)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: token.token,
        expires_in: token.expires_in,
    }))
}

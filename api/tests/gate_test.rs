//! Integration tests for authorization on protected routes

mod common;

use actix_web::http::header::{HeaderValue, AUTHORIZATION};
use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use common::TestContext;
use sf_api::create_app;
use sf_core::domain::entities::user::User;
use sf_core::repositories::UserRepository;
use sf_core::services::{TokenService, TokenServiceConfig};

#[actix_web::test]
async fn test_missing_header_is_no_token_provided() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/cart").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No token provided");
    assert_eq!(body["error"], "NO_TOKEN_PROVIDED");
}

#[actix_web::test]
async fn test_bearer_scheme_without_token_is_no_token_provided() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for header in ["Bearer", "Bearer ", "bearer   "] {
        let req = test::TestRequest::get()
            .uri("/cart")
            .insert_header((AUTHORIZATION, header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No token provided");
        assert_eq!(body["error"], "NO_TOKEN_PROVIDED");
    }
}

#[actix_web::test]
async fn test_bare_and_bearer_tokens_are_accepted() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let token = ctx.token_for(2, "alice");

    for header in [token.clone(), format!("Bearer {}", token)] {
        let req = test::TestRequest::get()
            .uri("/cart")
            .insert_header(("authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/cart")
        .insert_header(("authorization", "invalidtoken"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
    assert_eq!(body["message"], "Invalid or expired token");
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let token = ctx.token_issued_at(2, "alice", Utc::now() - Duration::hours(2));

    let req = test::TestRequest::get()
        .uri("/cart")
        .insert_header(("authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let foreign = TokenService::new(TokenServiceConfig::new("some-other-secret")).unwrap();
    let token = foreign.issue(&User::new(2, "alice", "unused")).unwrap().token;

    let req = test::TestRequest::get()
        .uri("/cart")
        .insert_header(("authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_non_utf8_header_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/cart")
        .insert_header((AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_deleted_user_is_user_not_found() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let token = ctx.token_for(2, "alice");

    assert!(ctx.infra.users.delete("alice").await.unwrap());

    let req = test::TestRequest::get()
        .uri("/cart")
        .insert_header(("authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_unauthorized_mutation_is_rejected_before_body() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // Bare item instead of {newItem}: the token is checked first
    let req = test::TestRequest::post()
        .uri("/cart")
        .insert_header(("authorization", "invalidtoken"))
        .set_json(json!({"id": 2, "quantity": 1, "name": "Black Sunglasses", "price": 100}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::delete().uri("/cart/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No token provided");

    let cart = ctx.state.carts.get("yellowleopard753").await.unwrap();
    assert_eq!(cart.len(), 1);
}

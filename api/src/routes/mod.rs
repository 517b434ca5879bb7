//! Route table

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod docs;
pub mod health;

use actix_web::web;

/// Register every endpoint on the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/api-docs", web::get().to(docs::api_docs))
        .route("/login", web::post().to(auth::login))
        .service(
            web::resource("/cart")
                .route(web::get().to(cart::get_cart))
                .route(web::post().to(cart::add_to_cart)),
        )
        .route("/cart/{itemId}", web::delete().to(cart::remove_from_cart))
        .route("/brands", web::get().to(catalog::list_brands))
        .route("/products", web::get().to(catalog::list_products));
}

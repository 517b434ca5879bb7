//! Catalog endpoints

use actix_web::{web, HttpResponse};

use crate::dto::ProductQuery;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for GET /brands
pub async fn list_brands(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let brands = state.catalog.brands().await?;
    Ok(HttpResponse::Ok().json(brands))
}

/// Handler for GET /products
///
/// `?brandId=<id>` restricts the list to one brand.
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductQuery>,
) -> Result<HttpResponse, ApiError> {
    let products = state.catalog.products(query.brand_id.as_deref()).await?;
    Ok(HttpResponse::Ok().json(products))
}

//! API documentation endpoint

use actix_web::HttpResponse;

/// Handler for GET /api-docs
pub async fn api_docs() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "storefront-api",
        "version": env!("CARGO_PKG_VERSION"),
        "authentication": {
            "header": "Authorization",
            "format": "<token> or Bearer <token>",
            "obtain": "POST /login"
        },
        "endpoints": {
            "login": {
                "path": "/login",
                "method": "POST",
                "description": "Exchange username and password for an access token",
                "request_body": {
                    "username": "string",
                    "password": "string"
                },
                "responses": {
                    "200": "{ token, expiresIn }",
                    "400": "Missing or empty field",
                    "401": "Invalid credentials"
                }
            },
            "get_cart": {
                "path": "/cart",
                "method": "GET",
                "description": "The caller's cart as an array of line items",
                "requires_auth": true,
                "responses": {
                    "200": "[ { id, name, description, price, quantity } ]",
                    "401": "No token provided / Invalid or expired token",
                    "404": "User not found"
                }
            },
            "add_to_cart": {
                "path": "/cart",
                "method": "POST",
                "description": "Add an item; an existing id has its quantity increased",
                "requires_auth": true,
                "request_body": {
                    "newItem": {
                        "id": "integer",
                        "name": "string",
                        "description": "string",
                        "price": "number >= 0",
                        "quantity": "integer >= 1"
                    }
                },
                "responses": {
                    "200": "{ message: \"Item added to cart\", cart }",
                    "400": "Invalid item",
                    "401": "No token provided / Invalid or expired token",
                    "404": "User not found"
                }
            },
            "remove_from_cart": {
                "path": "/cart/{itemId}",
                "method": "DELETE",
                "description": "Remove the entry with the given id",
                "requires_auth": true,
                "responses": {
                    "200": "{ message: \"Item removed from cart\", cart }",
                    "400": "Non-numeric itemId",
                    "401": "No token provided / Invalid or expired token",
                    "404": "Item not found in cart / User not found"
                }
            },
            "brands": {
                "path": "/brands",
                "method": "GET",
                "description": "All brands",
                "responses": { "200": "[ { id, name } ]" }
            },
            "products": {
                "path": "/products",
                "method": "GET",
                "description": "All products, or those of one brand",
                "query": { "brandId": "optional string" },
                "responses": {
                    "200": "[ { id, brandId, name, description, price, imageUrls } ]"
                }
            },
            "health": {
                "path": "/health",
                "method": "GET",
                "responses": { "200": "{ status, service, version, timestamp }" }
            }
        }
    }))
}

//! Application factory
//!
//! Builds the actix-web `App` from shared state. Used by the binary and by the
//! integration tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use sf_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::{json_error_handler, path_error_handler, query_error_handler};
use crate::middleware::create_cors;
use crate::routes;
use crate::state::AppState;

/// Create the application with all routes and middleware
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&state.config.cors);
    let payload_limit = state.config.server.max_payload_size;

    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(payload_limit)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(cors)
        .wrap(TracingLogger::default())
        .configure(routes::configure)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

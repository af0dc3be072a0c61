//! Application factory
//!
//! Builds the Actix-web application around an already wired [`AppState`].

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpRequest, HttpResponse, ResponseError,
};
use vb_core::repositories::{UserRepository, VacationRepository};

use crate::handlers::error::{json_error_handler, path_error_handler, ApiError};
use crate::routes::{self, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, V>(
    app_state: web::Data<AppState<U, V>>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let tokens = app_state.tokens.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Middleware order: CORS runs before logging on the way in
        .wrap(Logger::default())
        .wrap(cors)
        .service(web::scope("/api").configure(|cfg| routes::configure::<U, V>(cfg, tokens)))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::RouteNotFound {
        method: req.method().to_string(),
        route: req.path().to_string(),
    }
    .error_response()
}

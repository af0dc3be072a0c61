//! Route handlers and their wiring under `/api`

pub mod users;
pub mod vacations;

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use vb_core::{
    repositories::{UserRepository, VacationRepository},
    services::{CredentialHasher, TokenService, UserService, VacationService},
};
use vb_shared::ServerConfig;

use crate::middleware::{RequireAdmin, RequireAuth};

/// Application state shared by every handler
pub struct AppState<U: UserRepository, V: VacationRepository> {
    pub users: Arc<UserService<U>>,
    pub vacations: Arc<VacationService<V>>,
    pub tokens: Arc<TokenService>,
    pub server: ServerConfig,
}

impl<U: UserRepository, V: VacationRepository> AppState<U, V> {
    /// Wires the services over the given repositories
    ///
    /// The hasher and token service are built once by the caller and shared
    /// between the services and the authorization middleware.
    pub fn new(
        user_repository: Arc<U>,
        vacation_repository: Arc<V>,
        hasher: Arc<CredentialHasher>,
        tokens: Arc<TokenService>,
        server: ServerConfig,
    ) -> Self {
        Self {
            users: Arc::new(UserService::new(user_repository, hasher, Arc::clone(&tokens))),
            vacations: Arc::new(VacationService::new(vacation_repository)),
            tokens,
            server,
        }
    }
}

/// Registers every API route; paths are relative to the enclosing scope
pub fn configure<U, V>(cfg: &mut web::ServiceConfig, tokens: Arc<TokenService>)
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let auth = RequireAuth::new(Arc::clone(&tokens));
    let admin = RequireAdmin::new(tokens);

    cfg.route("/health", web::get().to(health_check))
        .route("/register", web::post().to(users::register::<U, V>))
        .route("/login", web::post().to(users::login::<U, V>))
        .service(
            web::resource("/vacations")
                .route(
                    web::get()
                        .to(vacations::list_vacations::<U, V>)
                        .wrap(auth.clone()),
                )
                .route(
                    web::post()
                        .to(vacations::add_vacation::<U, V>)
                        .wrap(admin.clone())
                        .wrap(auth.clone()),
                ),
        )
        .route(
            "/vacations-valid",
            web::get()
                .to(vacations::list_active_vacations::<U, V>)
                .wrap(auth.clone()),
        )
        .route(
            "/vacations-not-started",
            web::get()
                .to(vacations::list_upcoming_vacations::<U, V>)
                .wrap(auth.clone()),
        )
        .route(
            "/vacations/toggle-like/{id}",
            web::patch()
                .to(vacations::toggle_like::<U, V>)
                .wrap(auth.clone()),
        )
        .route(
            "/vacations/{userId}",
            web::get()
                .to(vacations::list_user_vacations::<U, V>)
                .wrap(auth.clone()),
        )
        .service(
            web::resource("/vacation/{id}")
                .route(web::get().to(vacations::get_vacation::<U, V>))
                .route(
                    web::delete()
                        .to(vacations::delete_vacation::<U, V>)
                        .wrap(admin.clone())
                        .wrap(auth.clone()),
                ),
        )
        .route(
            "/edit-vacation/{id}",
            web::put()
                .to(vacations::edit_vacation::<U, V>)
                .wrap(admin)
                .wrap(auth),
        );
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "vacations-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

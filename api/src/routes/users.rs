//! Registration and login

use actix_web::{web, HttpResponse};
use validator::Validate;
use vb_core::{
    errors::DomainError,
    repositories::{UserRepository, VacationRepository},
};

use super::AppState;
use crate::dto::{LoginRequest, RegisterRequest, ScriptGuard};
use crate::handlers::error::ApiError;

/// `POST /api/register`: creates a regular user and returns `{ token, user }`
pub async fn register<U, V>(
    state: web::Data<AppState<U, V>>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let request = body.into_inner();
    if request.contains_script() {
        return Err(DomainError::ScriptInjection.into());
    }
    request.validate()?;

    let session = state.users.register(request.into()).await?;
    log::info!("User {} registered", session.user.id);

    Ok(HttpResponse::Created().json(session))
}

/// `POST /api/login`: returns `{ token, user }` for valid credentials
pub async fn login<U, V>(
    state: web::Data<AppState<U, V>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let request = body.into_inner();
    request.validate()?;

    let session = state.users.login(request.into()).await?;
    Ok(HttpResponse::Ok().json(session))
}

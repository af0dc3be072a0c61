//! Vacation catalogue and likes

use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use validator::Validate;
use vb_core::{
    errors::DomainError,
    repositories::{UserRepository, VacationRepository},
};

use super::AppState;
use crate::dto::{LikedVacationResponse, ScriptGuard, VacationRequest, VacationResponse};
use crate::handlers::error::ApiError;
use crate::middleware::AuthContext;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn check_request(request: &VacationRequest) -> Result<(), ApiError> {
    if request.contains_script() {
        return Err(DomainError::ScriptInjection.into());
    }
    request.validate()?;
    Ok(())
}

/// `GET /api/vacations`
pub async fn list_vacations<U, V>(state: web::Data<AppState<U, V>>) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let vacations = state.vacations.list_all().await?;
    Ok(HttpResponse::Ok().json(VacationResponse::list(vacations, &state.server)))
}

/// `GET /api/vacations/{userId}`: vacations with like counts and the
/// given user's like flags
pub async fn list_user_vacations<U, V>(
    state: web::Data<AppState<U, V>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let vacations = state.vacations.list_for_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LikedVacationResponse::list(vacations, &state.server)))
}

/// `GET /api/vacations-valid`
pub async fn list_active_vacations<U, V>(
    state: web::Data<AppState<U, V>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let vacations = state.vacations.list_active(today()).await?;
    Ok(HttpResponse::Ok().json(VacationResponse::list(vacations, &state.server)))
}

/// `GET /api/vacations-not-started`
pub async fn list_upcoming_vacations<U, V>(
    state: web::Data<AppState<U, V>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let vacations = state.vacations.list_upcoming(today()).await?;
    Ok(HttpResponse::Ok().json(VacationResponse::list(vacations, &state.server)))
}

/// `GET /api/vacation/{id}`
pub async fn get_vacation<U, V>(
    state: web::Data<AppState<U, V>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let vacation = state.vacations.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(VacationResponse::new(vacation, &state.server)))
}

/// `POST /api/vacations` (admin)
pub async fn add_vacation<U, V>(
    state: web::Data<AppState<U, V>>,
    body: web::Json<VacationRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let request = body.into_inner();
    check_request(&request)?;

    let vacation = state.vacations.add(request.into(), today()).await?;
    Ok(HttpResponse::Created().json(VacationResponse::new(vacation, &state.server)))
}

/// `PUT /api/edit-vacation/{id}` (admin)
pub async fn edit_vacation<U, V>(
    state: web::Data<AppState<U, V>>,
    path: web::Path<i64>,
    body: web::Json<VacationRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let request = body.into_inner();
    check_request(&request)?;

    let vacation = state
        .vacations
        .edit(path.into_inner(), request.into(), today())
        .await?;
    Ok(HttpResponse::Ok().json(VacationResponse::new(vacation, &state.server)))
}

/// `DELETE /api/vacation/{id}` (admin)
pub async fn delete_vacation<U, V>(
    state: web::Data<AppState<U, V>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    state.vacations.remove(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// `PATCH /api/vacations/toggle-like/{id}`: likes or unlikes for the caller
pub async fn toggle_like<U, V>(
    state: web::Data<AppState<U, V>>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VacationRepository + 'static,
{
    let vacation = state
        .vacations
        .toggle_like(path.into_inner(), auth.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(LikedVacationResponse::new(vacation, &state.server)))
}

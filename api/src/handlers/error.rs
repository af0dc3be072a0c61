//! Terminal error handler: every failure leaves the API as an
//! `ErrorResponse` body with a matching HTTP status.

use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use validator::ValidationErrors;
use vb_core::errors::DomainError;
use vb_shared::{error_codes, ErrorResponse};

/// Errors returned by handlers and middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body or path could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// Request body failed DTO validation
    #[error("Invalid request data")]
    Invalid(#[from] ValidationErrors),

    #[error("Route {route} on method {method} not exist.")]
    RouteNotFound { method: String, route: String },
}

impl ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Domain(err) => err.error_code(),
            ApiError::BadRequest(_) | ApiError::Invalid(_) => error_codes::VALIDATION_ERROR,
            ApiError::RouteNotFound { .. } => error_codes::ROUTE_NOT_FOUND,
        }
    }

    fn client_message(&self) -> String {
        match self {
            ApiError::Domain(err) => err.client_message(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::BadRequest(_) | ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let mut body = ErrorResponse::new(self.error_code(), self.client_message());
        if let ApiError::Invalid(errors) = self {
            let mut fields: Vec<String> =
                errors.field_errors().keys().map(|k| k.to_string()).collect();
            fields.sort_unstable();
            body = body.add_detail("fields", fields);
        }

        HttpResponse::build(status).json(body)
    }
}

/// Error handler for `web::JsonConfig`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

/// Error handler for `web::PathConfig`
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid path parameter: {}", err)).into()
}

//! CORS middleware configuration for cross-origin requests.
//!
//! Development accepts any origin so the web client can be served from a
//! local dev server. Production only accepts `ServerConfig::allowed_origins`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use vb_shared::{Environment, ServerConfig};

const PREFLIGHT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for the given environment
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    if environment.is_production() {
        create_production_cors(&server.allowed_origins)
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(PREFLIGHT_MAX_AGE)
        .supports_credentials()
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(PREFLIGHT_MAX_AGE);

    for origin in allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    if allowed_origins.is_empty() {
        log::warn!("No ALLOWED_ORIGINS configured; cross-origin requests will be refused");
    }

    cors
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

//! HTTP layer of the Vacations backend: app factory, authorization
//! middleware, error rendering, DTOs and route handlers.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;

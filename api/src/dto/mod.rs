//! Request and response bodies of the HTTP API

pub mod user;
pub mod vacation;

pub use user::{LoginRequest, RegisterRequest};
pub use vacation::{LikedVacationResponse, VacationRequest, VacationResponse};

use vb_shared::validation::contains_script_tag;

/// Bodies whose free-text fields are screened for inline scripts
pub trait ScriptGuard {
    fn text_fields(&self) -> Vec<&str>;

    fn contains_script(&self) -> bool {
        self.text_fields().into_iter().any(contains_script_tag)
    }
}

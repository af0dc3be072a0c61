//! Vacation catalogue and like toggling use-cases

mod service;

#[cfg(test)]
mod tests;

pub use service::VacationService;

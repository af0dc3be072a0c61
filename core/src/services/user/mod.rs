//! User registration and login use-cases

mod service;


pub use service::UserService;

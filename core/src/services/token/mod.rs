//! Token service module for JWT management
//!
//! This module handles all session token operations:
//! - issuing signed tokens carrying the sanitized user identity
//! - verifying signature and expiry
//! - decoding the identity back out of a token

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;

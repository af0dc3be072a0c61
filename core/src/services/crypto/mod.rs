//! Credential hashing

mod hasher;

pub use hasher::CredentialHasher;

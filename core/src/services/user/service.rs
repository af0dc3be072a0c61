//! Registration and login on top of the credential hasher and token service

use std::sync::Arc;

use tracing::{debug, info};
use vb_shared::validation::{contains_script_tag, is_valid_email, is_valid_password, length_between};

use crate::domain::entities::user::{Credentials, NewUser, RegisterUser, Role, User};
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::crypto::CredentialHasher;
use crate::services::token::TokenService;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 30;

/// User account service
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
    hasher: Arc<CredentialHasher>,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repository: Arc<U>, hasher: Arc<CredentialHasher>, tokens: Arc<TokenService>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Registers a regular user and opens a session for them
    ///
    /// New accounts always get [`Role::User`]; the plaintext password is
    /// replaced by its digest before anything is stored.
    pub async fn register(&self, input: RegisterUser) -> DomainResult<AuthSession> {
        let fields = [&input.first_name, &input.last_name, &input.email, &input.password];
        if fields.iter().any(|field| contains_script_tag(field)) {
            return Err(DomainError::ScriptInjection);
        }
        validate_registration(&input)?;

        let email = input.email.trim().to_string();
        if self.repository.email_exists(&email).await? {
            debug!("Registration rejected: email already taken");
            return Err(AuthError::EmailTaken.into());
        }

        let new_user = NewUser {
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            email,
            password_digest: self.hasher.hash(&input.password),
            role: Role::User,
        };
        let id = self.repository.insert(new_user.clone()).await?;
        let user = new_user.into_user(id);

        info!("Registered user {}", user.id);
        self.open_session(&user)
    }

    /// Checks credentials and opens a session
    pub async fn login(&self, credentials: Credentials) -> DomainResult<AuthSession> {
        if credentials.email.trim().is_empty() {
            return Err(ValidationError::RequiredField { field: "email" }.into());
        }
        if credentials.password.is_empty() {
            return Err(ValidationError::RequiredField { field: "password" }.into());
        }

        match self.repository.find_by_email(credentials.email.trim()).await? {
            Some(user) if self.hasher.matches(&credentials.password, &user.password_digest) => {
                self.open_session(&user)
            }
            _ => {
                info!("Rejected login attempt");
                Err(AuthError::IncorrectCredentials.into())
            }
        }
    }

    fn open_session(&self, user: &User) -> DomainResult<AuthSession> {
        let identity = user.identity();
        let token = self.tokens.issue(&identity)?;
        Ok(AuthSession::new(token, identity))
    }
}

fn validate_registration(input: &RegisterUser) -> Result<(), ValidationError> {
    for (field, value) in [("firstName", &input.first_name), ("lastName", &input.last_name)] {
        if value.trim().is_empty() {
            return Err(ValidationError::RequiredField { field });
        }
        if !length_between(value, NAME_MIN, NAME_MAX) {
            return Err(ValidationError::InvalidLength {
                field,
                min: NAME_MIN,
                max: NAME_MAX,
            });
        }
    }

    if input.email.trim().is_empty() {
        return Err(ValidationError::RequiredField { field: "email" });
    }
    if !is_valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if input.password.is_empty() {
        return Err(ValidationError::RequiredField { field: "password" });
    }
    if !is_valid_password(&input.password) {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}

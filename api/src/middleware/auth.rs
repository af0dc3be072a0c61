//! Authorization middleware for protecting API endpoints.
//!
//! Requests pass through up to two stages:
//! 1. [`RequireAuth`] reads the bearer token, verifies it with the shared
//!    [`TokenService`] and attaches an [`AuthContext`] to the request.
//! 2. [`RequireAdmin`] applies [`RolePolicy`] to the attached identity. When
//!    no earlier stage ran it authenticates the request itself.
//!
//! A rejected request never reaches the wrapped handler.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use vb_core::{
    domain::entities::user::Identity,
    errors::{AuthError, DomainError},
    services::{policy::RolePolicy, token::TokenService},
};

use crate::handlers::error::ApiError;

/// Identity of the caller, attached to the request once its token verified
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub identity: Identity,
}

impl AuthContext {
    pub fn user_id(&self) -> i64 {
        self.identity.id
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let token = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Resolves the caller's identity from the request headers
///
/// Missing credentials, a token that fails verification and a payload that
/// cannot be decoded are reported as distinct errors.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<Identity, AuthError> {
    let token = extract_bearer_token(headers).ok_or(AuthError::MissingCredentials)?;

    if !tokens.verify(&token) {
        return Err(AuthError::NotLoggedIn);
    }

    tokens.decode(&token).ok_or(AuthError::InvalidToken)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Authenticated,
    Admin,
}

/// Middleware factory admitting any caller holding a valid token
#[derive(Clone)]
pub struct RequireAuth {
    tokens: Arc<TokenService>,
}

impl RequireAuth {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Middleware factory admitting only administrators
#[derive(Clone)]
pub struct RequireAdmin {
    tokens: Arc<TokenService>,
}

impl RequireAdmin {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddleware::new(service, Arc::clone(&self.tokens), Stage::Authenticated)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddleware::new(service, Arc::clone(&self.tokens), Stage::Admin)))
    }
}

/// Middleware service shared by both stages
pub struct AuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
    stage: Stage,
}

impl<S> AuthMiddleware<S> {
    fn new(service: S, tokens: Arc<TokenService>, stage: Stage) -> Self {
        Self {
            service: Rc::new(service),
            tokens,
            stage,
        }
    }
}

impl<S, B> Service<ServiceRequest> for AuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);
        let stage = self.stage;

        Box::pin(async move {
            let attached = req
                .extensions()
                .get::<AuthContext>()
                .map(|context| context.identity.clone());

            let identity = match attached {
                Some(identity) => identity,
                None => match authenticate(req.headers(), &tokens) {
                    Ok(identity) => identity,
                    Err(err) => {
                        log::debug!("Rejected {} {}: {}", req.method(), req.path(), err);
                        return Ok(reject(req, err));
                    }
                },
            };

            if stage == Stage::Admin {
                if let Err(err) = RolePolicy::authorize_admin(&identity) {
                    log::info!("User {} denied admin access to {}", identity.id, req.path());
                    return Ok(reject(req, err));
                }
            }

            req.extensions_mut().insert(AuthContext { identity });

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AuthError) -> ServiceResponse<EitherBody<B>> {
    req.error_response(ApiError::from(DomainError::from(err)))
        .map_into_right_body()
}

/// Extractor for the identity attached by the middleware
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::from(AuthError::MissingCredentials)).into());

        ready(result)
    }
}

//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository keyed by id
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| same_email(&u.email, email)).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| same_email(&u.email, email)))
    }

    async fn insert(&self, user: NewUser) -> Result<i64, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| same_email(&u.email, &user.email)) {
            return Err(AuthError::EmailTaken.into());
        }

        let id = users.keys().next_back().map_or(1, |last| last + 1);
        users.insert(id, user.into_user(id));
        Ok(id)
    }
}

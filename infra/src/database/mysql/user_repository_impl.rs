//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use vb_core::domain::entities::user::{NewUser, Role, User};
use vb_core::errors::{AuthError, DomainError};
use vb_core::repositories::UserRepository;

use super::db_error;

const USER_COLUMNS: &str = "id, firstName, lastName, email, password, roleId";

/// MySQL implementation of UserRepository over the `users` table
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Maps a `users` row to the entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let role_id: i32 = row
            .try_get("roleId")
            .map_err(|e| db_error("Failed to get roleId", e))?;
        let role = Role::from_id(i64::from(role_id)).ok_or_else(|| DomainError::Internal {
            message: format!("Unknown role id {}", role_id),
        })?;

        Ok(User {
            id: row.try_get("id").map_err(|e| db_error("Failed to get id", e))?,
            first_name: row
                .try_get("firstName")
                .map_err(|e| db_error("Failed to get firstName", e))?,
            last_name: row
                .try_get("lastName")
                .map_err(|e| db_error("Failed to get lastName", e))?,
            email: row.try_get("email").map_err(|e| db_error("Failed to get email", e))?,
            password_digest: row
                .try_get("password")
                .map_err(|e| db_error("Failed to get password", e))?,
            role,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check email", e))?;

        Ok(count > 0)
    }

    async fn insert(&self, user: NewUser) -> Result<i64, DomainError> {
        let query = r#"
            INSERT INTO users (firstName, lastName, email, password, roleId)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password_digest)
            .bind(i32::from(user.role.id()))
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::EmailTaken)
                }
                other => db_error("Failed to insert user", other),
            })?;

        i64::try_from(result.last_insert_id()).map_err(|e| DomainError::Internal {
            message: format!("User id out of range: {}", e),
        })
    }
}

//! Unit tests for mock user repository

use crate::domain::entities::user::{NewUser, Role};
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password_digest: "digest".to_string(),
        role: Role::User,
    }
}

#[tokio::test]
async fn test_mock_repository_insert_and_find() {
    let repo = MockUserRepository::new();

    let first = repo.insert(new_user("one@example.com")).await.unwrap();
    let second = repo.insert(new_user("two@example.com")).await.unwrap();
    assert_eq!((first, second), (1, 2));

    let found = repo.find_by_id(second).await.unwrap().unwrap();
    assert_eq!(found.email, "two@example.com");

    let by_email = repo.find_by_email("ONE@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, first);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_mock_repository_rejects_duplicate_email() {
    let repo = MockUserRepository::new();
    repo.insert(new_user("dup@example.com")).await.unwrap();

    let result = repo.insert(new_user("dup@example.com")).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::EmailTaken))));
    assert!(repo.email_exists("dup@example.com").await.unwrap());
    assert!(!repo.email_exists("other@example.com").await.unwrap());
}

#[tokio::test]
async fn test_mock_repository_missing_user() {
    let repo = MockUserRepository::new();
    assert!(repo.is_empty().await);
    assert!(repo.find_by_id(99).await.unwrap().is_none());
    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

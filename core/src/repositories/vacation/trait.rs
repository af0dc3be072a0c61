//! Vacation repository trait: catalogue storage and per-user likes.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::vacation::{LikedVacation, Vacation, VacationDraft};
use crate::errors::DomainError;

/// Repository trait for vacations and the likes join table
///
/// Listing methods return vacations ordered by start date.
#[async_trait]
pub trait VacationRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Vacation>, DomainError>;

    /// All vacations with like counts and whether `user_id` liked each one
    async fn find_all_for_user(&self, user_id: i64) -> Result<Vec<LikedVacation>, DomainError>;

    /// Vacations running on `today` (inclusive of both ends)
    async fn find_active(&self, today: NaiveDate) -> Result<Vec<Vacation>, DomainError>;

    /// Vacations starting after `today`
    async fn find_upcoming(&self, today: NaiveDate) -> Result<Vec<Vacation>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Vacation>, DomainError>;

    /// Persist a new vacation and return the assigned id
    async fn insert(&self, draft: VacationDraft) -> Result<i64, DomainError>;

    /// Replace a stored vacation; `Ok(false)` when the id does not exist
    async fn update(&self, vacation: Vacation) -> Result<bool, DomainError>;

    /// Delete a vacation together with its likes; `Ok(false)` when absent
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    async fn has_like(&self, user_id: i64, vacation_id: i64) -> Result<bool, DomainError>;

    async fn add_like(&self, user_id: i64, vacation_id: i64) -> Result<(), DomainError>;

    async fn remove_like(&self, user_id: i64, vacation_id: i64) -> Result<(), DomainError>;

    async fn likes_count(&self, vacation_id: i64) -> Result<i64, DomainError>;
}

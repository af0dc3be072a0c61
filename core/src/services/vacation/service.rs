//! Vacation catalogue service

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use vb_shared::validation::{contains_script_tag, length_between};

use crate::domain::entities::vacation::{LikedVacation, Vacation, VacationDraft};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::VacationRepository;

const DESTINATION_LEN: (usize, usize) = (3, 50);
const DESCRIPTION_LEN: (usize, usize) = (5, 500);
const MAX_PRICE: f64 = 10_000.0;

/// Lists, edits and likes vacations
///
/// Date-dependent operations take `today` explicitly; the HTTP layer passes
/// the current date.
pub struct VacationService<V: VacationRepository> {
    repository: Arc<V>,
}

impl<V: VacationRepository> VacationService<V> {
    pub fn new(repository: Arc<V>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Vacation>> {
        self.repository.find_all().await
    }

    /// Every vacation with its like count and the user's own like flag
    pub async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<LikedVacation>> {
        self.repository.find_all_for_user(user_id).await
    }

    pub async fn list_active(&self, today: NaiveDate) -> DomainResult<Vec<Vacation>> {
        self.repository.find_active(today).await
    }

    pub async fn list_upcoming(&self, today: NaiveDate) -> DomainResult<Vec<Vacation>> {
        self.repository.find_upcoming(today).await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Vacation> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    pub async fn add(&self, draft: VacationDraft, today: NaiveDate) -> DomainResult<Vacation> {
        check_draft(&draft, today)?;

        let id = self.repository.insert(draft.clone()).await?;
        info!("Added vacation {}", id);
        Ok(draft.into_vacation(id))
    }

    /// Replaces a vacation; the stored image is kept when the draft has none
    pub async fn edit(&self, id: i64, mut draft: VacationDraft, today: NaiveDate) -> DomainResult<Vacation> {
        check_draft(&draft, today)?;

        let existing = self.get(id).await?;
        if draft.image_name.is_none() {
            draft.image_name = existing.image_name;
        }

        let vacation = draft.into_vacation(id);
        if !self.repository.update(vacation.clone()).await? {
            return Err(DomainError::NotFound { id });
        }
        info!("Updated vacation {}", id);
        Ok(vacation)
    }

    /// Deletes a vacation and its likes
    pub async fn remove(&self, id: i64) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::NotFound { id });
        }
        info!("Deleted vacation {}", id);
        Ok(())
    }

    /// Likes the vacation for `user_id`, or unlikes it when already liked
    pub async fn toggle_like(&self, vacation_id: i64, user_id: i64) -> DomainResult<LikedVacation> {
        let vacation = self.get(vacation_id).await?;

        let is_liked = if self.repository.has_like(user_id, vacation_id).await? {
            self.repository.remove_like(user_id, vacation_id).await?;
            false
        } else {
            self.repository.add_like(user_id, vacation_id).await?;
            true
        };

        Ok(LikedVacation {
            likes_count: self.repository.likes_count(vacation_id).await?,
            is_liked,
            vacation,
        })
    }
}

fn check_draft(draft: &VacationDraft, today: NaiveDate) -> DomainResult<()> {
    let mut text_fields = vec![&draft.destination, &draft.description];
    if let Some(image_name) = &draft.image_name {
        text_fields.push(image_name);
    }
    if text_fields.iter().any(|field| contains_script_tag(field)) {
        return Err(DomainError::ScriptInjection);
    }

    validate_draft(draft, today)?;
    Ok(())
}

fn validate_draft(draft: &VacationDraft, today: NaiveDate) -> Result<(), ValidationError> {
    let text_rules = [
        ("destination", &draft.destination, DESTINATION_LEN),
        ("description", &draft.description, DESCRIPTION_LEN),
    ];
    for (field, value, (min, max)) in text_rules {
        if value.trim().is_empty() {
            return Err(ValidationError::RequiredField { field });
        }
        if !length_between(value, min, max) {
            return Err(ValidationError::InvalidLength { field, min, max });
        }
    }

    if draft.start_date <= today {
        return Err(ValidationError::StartDateNotInFuture);
    }
    if draft.end_date <= draft.start_date {
        return Err(ValidationError::EndBeforeStart);
    }

    if !(draft.price > 0.0 && draft.price <= MAX_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price",
            min: 0.0,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

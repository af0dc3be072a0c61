//! In-memory implementation of VacationRepository for tests and local runs

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::vacation::{LikedVacation, Vacation, VacationDraft};
use crate::errors::DomainError;

use super::trait_::VacationRepository;

#[derive(Default)]
struct State {
    vacations: BTreeMap<i64, Vacation>,
    /// (user_id, vacation_id)
    likes: BTreeSet<(i64, i64)>,
    next_id: i64,
}

impl State {
    fn sorted<F>(&self, keep: F) -> Vec<Vacation>
    where
        F: Fn(&Vacation) -> bool,
    {
        let mut vacations: Vec<Vacation> =
            self.vacations.values().filter(|v| keep(v)).cloned().collect();
        vacations.sort_by_key(|v| (v.start_date, v.id));
        vacations
    }

    fn count(&self, vacation_id: i64) -> i64 {
        self.likes.iter().filter(|(_, v)| *v == vacation_id).count() as i64
    }
}

/// Mock vacation repository
#[derive(Clone, Default)]
pub struct MockVacationRepository {
    state: Arc<RwLock<State>>,
}

impl MockVacationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VacationRepository for MockVacationRepository {
    async fn find_all(&self) -> Result<Vec<Vacation>, DomainError> {
        Ok(self.state.read().await.sorted(|_| true))
    }

    async fn find_all_for_user(&self, user_id: i64) -> Result<Vec<LikedVacation>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .sorted(|_| true)
            .into_iter()
            .map(|vacation| LikedVacation {
                likes_count: state.count(vacation.id),
                is_liked: state.likes.contains(&(user_id, vacation.id)),
                vacation,
            })
            .collect())
    }

    async fn find_active(&self, today: NaiveDate) -> Result<Vec<Vacation>, DomainError> {
        Ok(self.state.read().await.sorted(|v| v.is_active_on(today)))
    }

    async fn find_upcoming(&self, today: NaiveDate) -> Result<Vec<Vacation>, DomainError> {
        Ok(self.state.read().await.sorted(|v| v.starts_after(today)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vacation>, DomainError> {
        Ok(self.state.read().await.vacations.get(&id).cloned())
    }

    async fn insert(&self, draft: VacationDraft) -> Result<i64, DomainError> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = state.next_id;
        state.vacations.insert(id, draft.into_vacation(id));
        Ok(id)
    }

    async fn update(&self, vacation: Vacation) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.vacations.get_mut(&vacation.id) {
            Some(stored) => {
                *stored = vacation;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        state.likes.retain(|(_, vacation_id)| *vacation_id != id);
        Ok(state.vacations.remove(&id).is_some())
    }

    async fn has_like(&self, user_id: i64, vacation_id: i64) -> Result<bool, DomainError> {
        Ok(self.state.read().await.likes.contains(&(user_id, vacation_id)))
    }

    async fn add_like(&self, user_id: i64, vacation_id: i64) -> Result<(), DomainError> {
        self.state.write().await.likes.insert((user_id, vacation_id));
        Ok(())
    }

    async fn remove_like(&self, user_id: i64, vacation_id: i64) -> Result<(), DomainError> {
        self.state.write().await.likes.remove(&(user_id, vacation_id));
        Ok(())
    }

    async fn likes_count(&self, vacation_id: i64) -> Result<i64, DomainError> {
        Ok(self.state.read().await.count(vacation_id))
    }
}

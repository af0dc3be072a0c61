//! MySQL implementation of the VacationRepository trait.
//!
//! Vacations live in `vacations`; likes are rows of the `likes` join table
//! keyed by `(userId, vacationId)`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use vb_core::domain::entities::vacation::{LikedVacation, Vacation, VacationDraft};
use vb_core::errors::DomainError;
use vb_core::repositories::VacationRepository;

use super::db_error;

const VACATION_COLUMNS: &str =
    "v.id, v.destination, v.description, v.startDate, v.endDate, v.price, v.imageName";

/// MySQL implementation of VacationRepository
pub struct MySqlVacationRepository {
    pool: MySqlPool,
}

impl MySqlVacationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_vacation(row: &MySqlRow) -> Result<Vacation, DomainError> {
        Ok(Vacation {
            id: row.try_get("id").map_err(|e| db_error("Failed to get id", e))?,
            destination: row
                .try_get("destination")
                .map_err(|e| db_error("Failed to get destination", e))?,
            description: row
                .try_get("description")
                .map_err(|e| db_error("Failed to get description", e))?,
            start_date: row
                .try_get::<NaiveDate, _>("startDate")
                .map_err(|e| db_error("Failed to get startDate", e))?,
            end_date: row
                .try_get::<NaiveDate, _>("endDate")
                .map_err(|e| db_error("Failed to get endDate", e))?,
            price: row.try_get("price").map_err(|e| db_error("Failed to get price", e))?,
            image_name: row
                .try_get("imageName")
                .map_err(|e| db_error("Failed to get imageName", e))?,
        })
    }

    /// Lists vacations matching `filter`, binding `params` in order
    async fn fetch_vacations(&self, filter: &str, params: &[NaiveDate]) -> Result<Vec<Vacation>, DomainError> {
        let query = format!(
            "SELECT {} FROM vacations v {} ORDER BY v.startDate, v.id",
            VACATION_COLUMNS, filter
        );

        let mut statement = sqlx::query(&query);
        for param in params {
            statement = statement.bind(*param);
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list vacations", e))?;

        rows.iter().map(Self::row_to_vacation).collect()
    }
}

#[async_trait]
impl VacationRepository for MySqlVacationRepository {
    async fn find_all(&self) -> Result<Vec<Vacation>, DomainError> {
        self.fetch_vacations("", &[]).await
    }

    async fn find_all_for_user(&self, user_id: i64) -> Result<Vec<LikedVacation>, DomainError> {
        let query = format!(
            r#"
            SELECT {},
                (SELECT COUNT(*) FROM likes l WHERE l.vacationId = v.id) AS likesCount,
                (SELECT COUNT(*) FROM likes l WHERE l.vacationId = v.id AND l.userId = ?) AS likedByUser
            FROM vacations v
            ORDER BY v.startDate, v.id
            "#,
            VACATION_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list vacations for user", e))?;

        rows.iter()
            .map(|row| -> Result<LikedVacation, DomainError> {
                let liked_by_user: i64 = row
                    .try_get("likedByUser")
                    .map_err(|e| db_error("Failed to get likedByUser", e))?;
                Ok(LikedVacation {
                    vacation: Self::row_to_vacation(row)?,
                    likes_count: row
                        .try_get("likesCount")
                        .map_err(|e| db_error("Failed to get likesCount", e))?,
                    is_liked: liked_by_user > 0,
                })
            })
            .collect()
    }

    async fn find_active(&self, today: NaiveDate) -> Result<Vec<Vacation>, DomainError> {
        self.fetch_vacations("WHERE v.startDate <= ? AND v.endDate >= ?", &[today, today])
            .await
    }

    async fn find_upcoming(&self, today: NaiveDate) -> Result<Vec<Vacation>, DomainError> {
        self.fetch_vacations("WHERE v.startDate > ?", &[today]).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vacation>, DomainError> {
        let query = format!("SELECT {} FROM vacations v WHERE v.id = ?", VACATION_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find vacation", e))?;

        row.as_ref().map(Self::row_to_vacation).transpose()
    }

    async fn insert(&self, draft: VacationDraft) -> Result<i64, DomainError> {
        let query = r#"
            INSERT INTO vacations (destination, description, startDate, endDate, price, imageName)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&draft.destination)
            .bind(&draft.description)
            .bind(draft.start_date)
            .bind(draft.end_date)
            .bind(draft.price)
            .bind(&draft.image_name)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert vacation", e))?;

        i64::try_from(result.last_insert_id()).map_err(|e| DomainError::Internal {
            message: format!("Vacation id out of range: {}", e),
        })
    }

    async fn update(&self, vacation: Vacation) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE vacations
            SET destination = ?, description = ?, startDate = ?, endDate = ?, price = ?, imageName = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&vacation.destination)
            .bind(&vacation.description)
            .bind(vacation.start_date)
            .bind(vacation.end_date)
            .bind(vacation.price)
            .bind(&vacation.image_name)
            .bind(vacation.id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update vacation", e))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        // MySQL reports zero affected rows when nothing changed.
        Ok(self.find_by_id(vacation.id).await?.is_some())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to start transaction", e))?;

        sqlx::query("DELETE FROM likes WHERE vacationId = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete likes", e))?;

        let result = sqlx::query("DELETE FROM vacations WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete vacation", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit vacation delete", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn has_like(&self, user_id: i64, vacation_id: i64) -> Result<bool, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE userId = ? AND vacationId = ?")
                .bind(user_id)
                .bind(vacation_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("Failed to check like", e))?;

        Ok(count > 0)
    }

    async fn add_like(&self, user_id: i64, vacation_id: i64) -> Result<(), DomainError> {
        sqlx::query("INSERT IGNORE INTO likes (userId, vacationId) VALUES (?, ?)")
            .bind(user_id)
            .bind(vacation_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to add like", e))?;
        Ok(())
    }

    async fn remove_like(&self, user_id: i64, vacation_id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM likes WHERE userId = ? AND vacationId = ?")
            .bind(user_id)
            .bind(vacation_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to remove like", e))?;
        Ok(())
    }

    async fn likes_count(&self, vacation_id: i64) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE vacationId = ?")
            .bind(vacation_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count likes", e))
    }
}

//! Vacation entity and its like-aware projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable vacation package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacation {
    pub id: i64,
    pub destination: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    /// File name of the cover image, resolved to a URL by the API layer
    pub image_name: Option<String>,
}

impl Vacation {
    /// Whether `today` falls within the vacation dates (inclusive)
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }

    /// Whether the vacation starts after `today`
    pub fn starts_after(&self, today: NaiveDate) -> bool {
        self.start_date > today
    }
}

/// Vacation fields supplied when adding or editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationDraft {
    pub destination: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    #[serde(default)]
    pub image_name: Option<String>,
}

impl VacationDraft {
    pub fn into_vacation(self, id: i64) -> Vacation {
        Vacation {
            id,
            destination: self.destination,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            image_name: self.image_name,
        }
    }
}

/// Vacation as seen by a particular user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedVacation {
    #[serde(flatten)]
    pub vacation: Vacation,
    pub likes_count: i64,
    pub is_liked: bool,
}

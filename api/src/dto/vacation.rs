use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vb_core::domain::entities::vacation::{LikedVacation, Vacation, VacationDraft};
use vb_shared::ServerConfig;

use super::ScriptGuard;

/// Request body for adding or editing a vacation
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    #[validate(length(min = 3, max = 50, message = "Destination must be 3 to 50 characters"))]
    pub destination: String,

    #[validate(length(min = 5, max = 500, message = "Description must be 5 to 500 characters"))]
    pub description: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(range(exclusive_min = 0.0, max = 10000.0, message = "Price must be positive and at most 10000"))]
    pub price: f64,

    #[serde(default)]
    pub image_name: Option<String>,
}

impl ScriptGuard for VacationRequest {
    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.destination.as_str(), self.description.as_str()];
        if let Some(image_name) = &self.image_name {
            fields.push(image_name);
        }
        fields
    }
}

impl From<VacationRequest> for VacationDraft {
    fn from(request: VacationRequest) -> Self {
        Self {
            destination: request.destination,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            price: request.price,
            image_name: request.image_name.filter(|name| !name.trim().is_empty()),
        }
    }
}

/// Vacation with its public image URL
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationResponse {
    #[serde(flatten)]
    pub vacation: Vacation,
    pub image_url: Option<String>,
}

impl VacationResponse {
    pub fn new(vacation: Vacation, server: &ServerConfig) -> Self {
        let image_url = vacation.image_name.as_deref().map(|name| server.image_url(name));
        Self { vacation, image_url }
    }

    pub fn list(vacations: Vec<Vacation>, server: &ServerConfig) -> Vec<Self> {
        vacations.into_iter().map(|v| Self::new(v, server)).collect()
    }
}

/// Like-aware vacation with its public image URL
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedVacationResponse {
    #[serde(flatten)]
    pub vacation: LikedVacation,
    pub image_url: Option<String>,
}

impl LikedVacationResponse {
    pub fn new(vacation: LikedVacation, server: &ServerConfig) -> Self {
        let image_url = vacation
            .vacation
            .image_name
            .as_deref()
            .map(|name| server.image_url(name));
        Self { vacation, image_url }
    }

    pub fn list(vacations: Vec<LikedVacation>, server: &ServerConfig) -> Vec<Self> {
        vacations.into_iter().map(|v| Self::new(v, server)).collect()
    }
}

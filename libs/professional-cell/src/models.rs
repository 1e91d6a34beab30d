use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfessionalRequest {
    pub display_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    /// Services this professional offers, replacing any existing links.
    pub service_ids: Option<Vec<Uuid>>,
}

/// Fields left out keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfessionalRequest {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub service_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignServicesRequest {
    pub service_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub day_of_week: Option<i32>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

// Error types specific to professional and schedule operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleError {
    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Availability window not found")]
    WindowNotFound,

    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidDayOfWeek(i32),

    #[error("Start time must be before end time")]
    InvalidTimeRange,

    #[error("Availability times use minute precision")]
    NotMinutePrecision,

    #[error("Availability window overlaps an existing window for that day")]
    WindowConflict,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::ProfessionalNotFound | ScheduleError::WindowNotFound => {
                AppError::NotFound(err.to_string())
            }
            ScheduleError::WindowConflict => AppError::Conflict(err.to_string()),
            _ => AppError::ValidationError(err.to_string()),
        }
    }
}

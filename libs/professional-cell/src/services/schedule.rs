use chrono::{NaiveTime, Timelike, Utc};
use tracing::debug;
use uuid::Uuid;

use shared_models::AvailabilityWindow;
use shared_store::Store;

use crate::models::{CreateAvailabilityRequest, ScheduleError, UpdateAvailabilityRequest};

/// Write side of the weekly schedule. Windows are validated here so the
/// slot computation can treat its inputs as well-formed: day-of-week in
/// range, start strictly before end, minute precision, and no overlap
/// between two windows of the same professional on the same day (several
/// disjoint windows per day are allowed and unioned at query time).
pub struct ScheduleService {
    store: Store,
}

impl ScheduleService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn create_window(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
        request: CreateAvailabilityRequest,
    ) -> Result<AvailabilityWindow, ScheduleError> {
        if self
            .store
            .get_professional(company_id, professional_id)
            .await
            .is_none()
        {
            return Err(ScheduleError::ProfessionalNotFound);
        }

        validate_bounds(request.day_of_week, request.start_time, request.end_time)?;
        self.check_window_conflicts(
            professional_id,
            request.day_of_week,
            request.start_time,
            request.end_time,
            None,
        )
        .await?;

        let now = Utc::now();
        let window = AvailabilityWindow {
            id: Uuid::new_v4(),
            professional_id,
            day_of_week: request.day_of_week,
            start_time: request.start_time,
            end_time: request.end_time,
            created_at: now,
            updated_at: now,
        };

        debug!(
            "Creating availability window {} for professional {}",
            window.id, professional_id
        );
        self.store.insert_window(window.clone()).await;
        Ok(window)
    }

    pub async fn list_windows(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
    ) -> Result<Vec<AvailabilityWindow>, ScheduleError> {
        if self
            .store
            .get_professional(company_id, professional_id)
            .await
            .is_none()
        {
            return Err(ScheduleError::ProfessionalNotFound);
        }
        Ok(self.store.list_windows(professional_id).await)
    }

    pub async fn update_window(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
        window_id: Uuid,
        request: UpdateAvailabilityRequest,
    ) -> Result<AvailabilityWindow, ScheduleError> {
        if self
            .store
            .get_professional(company_id, professional_id)
            .await
            .is_none()
        {
            return Err(ScheduleError::ProfessionalNotFound);
        }

        let mut window = self
            .store
            .get_window(professional_id, window_id)
            .await
            .ok_or(ScheduleError::WindowNotFound)?;

        if let Some(day_of_week) = request.day_of_week {
            window.day_of_week = day_of_week;
        }
        if let Some(start_time) = request.start_time {
            window.start_time = start_time;
        }
        if let Some(end_time) = request.end_time {
            window.end_time = end_time;
        }

        validate_bounds(window.day_of_week, window.start_time, window.end_time)?;
        self.check_window_conflicts(
            professional_id,
            window.day_of_week,
            window.start_time,
            window.end_time,
            Some(window_id),
        )
        .await?;

        window.updated_at = Utc::now();
        if !self.store.replace_window(window.clone()).await {
            return Err(ScheduleError::WindowNotFound);
        }
        Ok(window)
    }

    pub async fn delete_window(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
        window_id: Uuid,
    ) -> Result<(), ScheduleError> {
        if self
            .store
            .get_professional(company_id, professional_id)
            .await
            .is_none()
        {
            return Err(ScheduleError::ProfessionalNotFound);
        }
        if !self.store.remove_window(professional_id, window_id).await {
            return Err(ScheduleError::WindowNotFound);
        }
        debug!(
            "Deleted availability window {} for professional {}",
            window_id, professional_id
        );
        Ok(())
    }

    async fn check_window_conflicts(
        &self,
        professional_id: Uuid,
        day_of_week: i32,
        start_time: NaiveTime,
        end_time: NaiveTime,
        exclude_id: Option<Uuid>,
    ) -> Result<(), ScheduleError> {
        let existing = self.store.list_windows(professional_id).await;

        for window in existing {
            if window.day_of_week != day_of_week {
                continue;
            }
            if Some(window.id) == exclude_id {
                continue;
            }
            if start_time < window.end_time && end_time > window.start_time {
                return Err(ScheduleError::WindowConflict);
            }
        }

        Ok(())
    }
}

fn validate_bounds(
    day_of_week: i32,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<(), ScheduleError> {
    if !(0..=6).contains(&day_of_week) {
        return Err(ScheduleError::InvalidDayOfWeek(day_of_week));
    }
    if start_time >= end_time {
        return Err(ScheduleError::InvalidTimeRange);
    }
    if start_time.second() != 0 || end_time.second() != 0 {
        return Err(ScheduleError::NotMinutePrecision);
    }
    Ok(())
}

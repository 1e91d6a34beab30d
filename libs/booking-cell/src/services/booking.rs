use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use scheduling_cell::services::slots;
use shared_models::{Appointment, AppointmentStatus};
use shared_store::Store;

use crate::models::{
    AppointmentSearchQuery, AppointmentSummary, BookAppointmentRequest, BookingError,
    CancelAppointmentRequest, RescheduleAppointmentRequest, UpdateAppointmentRequest,
};
use crate::services::lifecycle;

pub struct BookingService {
    store: Store,
}

impl BookingService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Book one computed slot. The requested start must be offered by the
    /// slot computation at booking time, which rules out double bookings
    /// and starts outside the professional's schedule in one check.
    pub async fn book_appointment(
        &self,
        company_id: Uuid,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        if self
            .store
            .get_client(company_id, request.client_id)
            .await
            .is_none()
        {
            return Err(BookingError::ClientNotFound);
        }
        if self
            .store
            .get_professional(company_id, request.professional_id)
            .await
            .is_none()
        {
            return Err(BookingError::ProfessionalNotFound);
        }
        if self
            .store
            .get_service(company_id, request.service_id)
            .await
            .is_none()
        {
            return Err(BookingError::ServiceNotFound);
        }

        let snapshot = self
            .store
            .scheduling_snapshot(company_id, request.professional_id)
            .await;

        let date = request.start_time.date_naive();
        let slot = slots::slot_for_start(
            request.professional_id,
            date,
            request.service_id,
            &snapshot.windows,
            &snapshot.appointments,
            &snapshot.services,
            request.start_time,
        )
        .ok_or_else(|| {
            warn!(
                "Rejected booking for professional {} at {}: not a bookable slot",
                request.professional_id, request.start_time
            );
            BookingError::SlotNotAvailable
        })?;

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            company_id,
            client_id: request.client_id,
            professional_id: request.professional_id,
            service_id: request.service_id,
            start_time: slot.start_time,
            end_time: slot.end_time,
            status: AppointmentStatus::Pending,
            notes: request.notes,
            cancellation_reason: None,
            created_at: now,
            updated_at: now,
        };

        debug!(
            "Booked appointment {} for professional {} at {}",
            appointment.id, appointment.professional_id, appointment.start_time
        );
        self.store.insert_appointment(appointment.clone()).await;
        Ok(appointment)
    }

    pub async fn search_appointments(
        &self,
        company_id: Uuid,
        query: AppointmentSearchQuery,
    ) -> Vec<Appointment> {
        let mut appointments = self.store.list_appointments(company_id).await;

        if let Some(professional_id) = query.professional_id {
            appointments.retain(|a| a.professional_id == professional_id);
        }
        if let Some(client_id) = query.client_id {
            appointments.retain(|a| a.client_id == client_id);
        }
        if let Some(status) = query.status {
            appointments.retain(|a| a.status == status);
        }
        if let Some(from_date) = query.from_date {
            appointments.retain(|a| a.start_time >= from_date);
        }
        if let Some(to_date) = query.to_date {
            appointments.retain(|a| a.start_time <= to_date);
        }

        appointments.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        appointments
    }

    pub async fn get_appointment(
        &self,
        company_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Appointment, BookingError> {
        self.store
            .get_appointment(company_id, appointment_id)
            .await
            .ok_or(BookingError::NotFound)
    }

    pub async fn update_appointment(
        &self,
        company_id: Uuid,
        appointment_id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        let mut appointment = self.get_appointment(company_id, appointment_id).await?;

        if let Some(status) = request.status {
            lifecycle::validate_transition(appointment.status, status)?;
            appointment.status = status;
        }
        if let Some(notes) = request.notes {
            appointment.notes = Some(notes);
        }
        appointment.updated_at = Utc::now();

        if !self.store.replace_appointment(appointment.clone()).await {
            return Err(BookingError::NotFound);
        }
        Ok(appointment)
    }

    /// Cancelling frees the occupied interval immediately: the slot
    /// computation ignores cancelled appointments, so the time becomes
    /// bookable again without any further bookkeeping.
    pub async fn cancel_appointment(
        &self,
        company_id: Uuid,
        appointment_id: Uuid,
        request: CancelAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        let mut appointment = self.get_appointment(company_id, appointment_id).await?;

        lifecycle::validate_transition(appointment.status, AppointmentStatus::Cancelled)?;
        appointment.status = AppointmentStatus::Cancelled;
        appointment.cancellation_reason = request.reason;
        appointment.updated_at = Utc::now();

        if !self.store.replace_appointment(appointment.clone()).await {
            return Err(BookingError::NotFound);
        }
        debug!("Cancelled appointment {}", appointment_id);
        Ok(appointment)
    }

    /// Move an appointment to another computed slot. The appointment being
    /// moved is excluded from the occupied set, so shifting by less than
    /// its own duration works.
    pub async fn reschedule_appointment(
        &self,
        company_id: Uuid,
        appointment_id: Uuid,
        request: RescheduleAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        let mut appointment = self.get_appointment(company_id, appointment_id).await?;

        if appointment.status.is_terminal() {
            return Err(BookingError::ValidationError(format!(
                "Cannot reschedule a {} appointment",
                appointment.status
            )));
        }

        let snapshot = self
            .store
            .scheduling_snapshot(company_id, appointment.professional_id)
            .await;
        let remaining: Vec<_> = snapshot
            .appointments
            .into_iter()
            .filter(|a| a.id != appointment_id)
            .collect();

        let date = request.new_start_time.date_naive();
        let slot = slots::slot_for_start(
            appointment.professional_id,
            date,
            appointment.service_id,
            &snapshot.windows,
            &remaining,
            &snapshot.services,
            request.new_start_time,
        )
        .ok_or(BookingError::SlotNotAvailable)?;

        appointment.start_time = slot.start_time;
        appointment.end_time = slot.end_time;
        appointment.updated_at = Utc::now();

        if !self.store.replace_appointment(appointment.clone()).await {
            return Err(BookingError::NotFound);
        }
        debug!(
            "Rescheduled appointment {} to {}",
            appointment_id, appointment.start_time
        );
        Ok(appointment)
    }

    pub async fn summarize_appointments(
        &self,
        company_id: Uuid,
        from_date: Option<chrono::DateTime<Utc>>,
        to_date: Option<chrono::DateTime<Utc>>,
    ) -> AppointmentSummary {
        let mut appointments = self.store.list_appointments(company_id).await;
        if let Some(from) = from_date {
            appointments.retain(|a| a.start_time >= from);
        }
        if let Some(to) = to_date {
            appointments.retain(|a| a.start_time <= to);
        }

        let mut summary = AppointmentSummary {
            total: appointments.len(),
            ..AppointmentSummary::default()
        };
        for appointment in &appointments {
            match appointment.status {
                AppointmentStatus::Pending => summary.pending += 1,
                AppointmentStatus::Confirmed => summary.confirmed += 1,
                AppointmentStatus::Completed => summary.completed += 1,
                AppointmentStatus::Cancelled => summary.cancelled += 1,
            }
        }
        summary
    }
}

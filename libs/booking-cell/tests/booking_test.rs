// libs/booking-cell/tests/booking_test.rs
//
// Booking workflow coverage: slot validation at booking time, cancel
// freeing the slot, reschedule excluding the moved appointment, status
// transitions and the dashboard summary.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use booking_cell::models::{
    AppointmentSearchQuery, BookAppointmentRequest, BookingError, CancelAppointmentRequest,
    RescheduleAppointmentRequest, UpdateAppointmentRequest,
};
use booking_cell::services::booking::BookingService;
use shared_models::{
    AppointmentStatus, AvailabilityWindow, Client, Professional, Service,
};
use shared_store::{Dataset, Store};

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

fn company_id() -> Uuid {
    Uuid::from_u128(0xa0)
}

fn professional_id() -> Uuid {
    Uuid::from_u128(0xb0)
}

fn service_id() -> Uuid {
    Uuid::from_u128(0xc0)
}

fn client_id() -> Uuid {
    Uuid::from_u128(0xd0)
}

/// 2025-06-16 is a Monday.
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 6, 16)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
}

async fn populated_store() -> Store {
    let now = Utc::now();
    let store = Store::new();
    store
        .load(Dataset {
            clients: vec![Client {
                id: client_id(),
                company_id: company_id(),
                name: "Robert Hayes".to_string(),
                email: None,
                phone: None,
                created_at: now,
                updated_at: now,
            }],
            professionals: vec![Professional {
                id: professional_id(),
                company_id: company_id(),
                display_name: "Marina Duarte".to_string(),
                email: "marina@example.com".to_string(),
                bio: None,
                specialties: vec![],
                created_at: now,
                updated_at: now,
            }],
            services: vec![Service {
                id: service_id(),
                company_id: company_id(),
                name: "General consultation".to_string(),
                description: None,
                duration_minutes: 30,
                price: Some(150.0),
                created_at: now,
                updated_at: now,
            }],
            availability_windows: vec![AvailabilityWindow {
                id: Uuid::new_v4(),
                professional_id: professional_id(),
                day_of_week: 1,
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                created_at: now,
                updated_at: now,
            }],
            ..Dataset::default()
        })
        .await;
    store
}

fn book_request(start: DateTime<Utc>) -> BookAppointmentRequest {
    BookAppointmentRequest {
        client_id: client_id(),
        professional_id: professional_id(),
        service_id: service_id(),
        start_time: start,
        notes: None,
    }
}

// ==============================================================================
// BOOKING
// ==============================================================================

#[tokio::test]
async fn booking_a_computed_slot_succeeds() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let appointment = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();

    assert_eq!(appointment.start_time, at(9, 0));
    assert_eq!(appointment.end_time, at(9, 30));
    assert_eq!(appointment.status, AppointmentStatus::Pending);
}

#[tokio::test]
async fn booking_the_same_slot_twice_is_rejected() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();
    let second = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await;

    assert!(matches!(second, Err(BookingError::SlotNotAvailable)));
}

#[tokio::test]
async fn booking_an_overlapping_start_is_rejected() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();
    // 08:45-09:15 overlaps the 09:00-09:30 booking.
    let overlapping = service
        .book_appointment(company_id(), book_request(at(8, 45)))
        .await;

    assert!(matches!(overlapping, Err(BookingError::SlotNotAvailable)));
}

#[tokio::test]
async fn booking_outside_the_schedule_is_rejected() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    // 13:00 is past the window end.
    let result = service
        .book_appointment(company_id(), book_request(at(13, 0)))
        .await;
    assert!(matches!(result, Err(BookingError::SlotNotAvailable)));

    // Off-grid start inside the window.
    let off_grid = service
        .book_appointment(company_id(), book_request(at(9, 5)))
        .await;
    assert!(matches!(off_grid, Err(BookingError::SlotNotAvailable)));
}

#[tokio::test]
async fn booking_with_unknown_references_is_rejected() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let mut request = book_request(at(9, 0));
    request.client_id = Uuid::new_v4();
    assert!(matches!(
        service.book_appointment(company_id(), request).await,
        Err(BookingError::ClientNotFound)
    ));

    let mut request = book_request(at(9, 0));
    request.service_id = Uuid::new_v4();
    assert!(matches!(
        service.book_appointment(company_id(), request).await,
        Err(BookingError::ServiceNotFound)
    ));
}

// ==============================================================================
// CANCELLATION AND RESCHEDULING
// ==============================================================================

#[tokio::test]
async fn cancelling_frees_the_slot_for_rebooking() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let appointment = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();

    let cancelled = service
        .cancel_appointment(
            company_id(),
            appointment.id,
            CancelAppointmentRequest {
                reason: Some("Client asked to rebook".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(
        cancelled.cancellation_reason.as_deref(),
        Some("Client asked to rebook")
    );

    // The freed slot books again.
    let rebooked = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();
    assert_eq!(rebooked.start_time, at(9, 0));
}

#[tokio::test]
async fn rescheduling_to_an_adjacent_slot_excludes_itself() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let appointment = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();

    // 09:15-09:45 overlaps the appointment's own 09:00-09:30 interval; the
    // move must still be allowed because the appointment vacates it.
    let moved = service
        .reschedule_appointment(
            company_id(),
            appointment.id,
            RescheduleAppointmentRequest {
                new_start_time: at(9, 15),
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.start_time, at(9, 15));
    assert_eq!(moved.end_time, at(9, 45));
}

#[tokio::test]
async fn rescheduling_onto_another_booking_is_rejected() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();
    let second = service
        .book_appointment(company_id(), book_request(at(10, 0)))
        .await
        .unwrap();

    let result = service
        .reschedule_appointment(
            company_id(),
            second.id,
            RescheduleAppointmentRequest {
                new_start_time: at(9, 0),
            },
        )
        .await;

    assert!(matches!(result, Err(BookingError::SlotNotAvailable)));
}

#[tokio::test]
async fn cancelled_appointments_cannot_be_rescheduled() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let appointment = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();
    service
        .cancel_appointment(
            company_id(),
            appointment.id,
            CancelAppointmentRequest { reason: None },
        )
        .await
        .unwrap();

    let result = service
        .reschedule_appointment(
            company_id(),
            appointment.id,
            RescheduleAppointmentRequest {
                new_start_time: at(10, 0),
            },
        )
        .await;
    assert!(matches!(result, Err(BookingError::ValidationError(_))));
}

// ==============================================================================
// STATUS UPDATES, SEARCH AND SUMMARY
// ==============================================================================

#[tokio::test]
async fn status_updates_follow_the_lifecycle() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let appointment = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();

    let confirmed = service
        .update_appointment(
            company_id(),
            appointment.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Confirmed),
                notes: Some("Arriving early".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);
    assert_eq!(confirmed.notes.as_deref(), Some("Arriving early"));

    // Pending -> Completed is not allowed for a fresh booking.
    let fresh = service
        .book_appointment(company_id(), book_request(at(10, 0)))
        .await
        .unwrap();
    let jump = service
        .update_appointment(
            company_id(),
            fresh.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Completed),
                notes: None,
            },
        )
        .await;
    assert!(matches!(
        jump,
        Err(BookingError::InvalidStatusTransition { .. })
    ));
}

#[tokio::test]
async fn search_filters_by_status_and_range() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let first = service
        .book_appointment(company_id(), book_request(at(8, 0)))
        .await
        .unwrap();
    service
        .book_appointment(company_id(), book_request(at(10, 0)))
        .await
        .unwrap();
    service
        .update_appointment(
            company_id(),
            first.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Confirmed),
                notes: None,
            },
        )
        .await
        .unwrap();

    let confirmed = service
        .search_appointments(
            company_id(),
            AppointmentSearchQuery {
                professional_id: Some(professional_id()),
                client_id: None,
                status: Some(AppointmentStatus::Confirmed),
                from_date: None,
                to_date: None,
            },
        )
        .await;
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, first.id);

    let morning_only = service
        .search_appointments(
            company_id(),
            AppointmentSearchQuery {
                professional_id: None,
                client_id: None,
                status: None,
                from_date: Some(at(9, 0)),
                to_date: None,
            },
        )
        .await;
    assert_eq!(morning_only.len(), 1);
    assert_eq!(morning_only[0].start_time, at(10, 0));
}

#[tokio::test]
async fn summary_counts_by_status() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let first = service
        .book_appointment(company_id(), book_request(at(8, 0)))
        .await
        .unwrap();
    let second = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();
    service
        .book_appointment(company_id(), book_request(at(10, 0)))
        .await
        .unwrap();

    service
        .update_appointment(
            company_id(),
            first.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Confirmed),
                notes: None,
            },
        )
        .await
        .unwrap();
    service
        .cancel_appointment(
            company_id(),
            second.id,
            CancelAppointmentRequest { reason: None },
        )
        .await
        .unwrap();

    let summary = service
        .summarize_appointments(company_id(), None, None)
        .await;
    assert_eq!(summary.total, 3);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.confirmed, 1);
    assert_eq!(summary.cancelled, 1);
    assert_eq!(summary.completed, 0);
}

#[tokio::test]
async fn appointments_are_invisible_to_other_tenants() {
    let store = populated_store().await;
    let service = BookingService::new(store);

    let appointment = service
        .book_appointment(company_id(), book_request(at(9, 0)))
        .await
        .unwrap();

    let other_tenant = Uuid::from_u128(0xa1);
    let result = service
        .get_appointment(other_tenant, appointment.id)
        .await;
    assert!(matches!(result, Err(BookingError::NotFound)));
}

// libs/professional-cell/tests/schedule_test.rs
//
// Write-side validation of weekly availability windows: bounds checks,
// overlap rejection, and the multi-window-per-day policy.

use chrono::{NaiveTime, Utc};
use uuid::Uuid;

use professional_cell::models::{
    CreateAvailabilityRequest, ScheduleError, UpdateAvailabilityRequest,
};
use professional_cell::services::schedule::ScheduleService;
use shared_models::Professional;
use shared_store::{Dataset, Store};

fn company_id() -> Uuid {
    Uuid::from_u128(0xa0)
}

fn professional_id() -> Uuid {
    Uuid::from_u128(0xb0)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn request(day_of_week: i32, start: NaiveTime, end: NaiveTime) -> CreateAvailabilityRequest {
    CreateAvailabilityRequest {
        day_of_week,
        start_time: start,
        end_time: end,
    }
}

async fn store_with_professional() -> Store {
    let now = Utc::now();
    let store = Store::new();
    store
        .load(Dataset {
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
            ..Dataset::default()
        })
        .await;
    store
}

#[tokio::test]
async fn creates_a_valid_window() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    let window = service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(8, 0), hm(12, 0)),
        )
        .await
        .unwrap();

    assert_eq!(window.day_of_week, 1);
    assert_eq!(window.start_time, hm(8, 0));
    assert_eq!(window.end_time, hm(12, 0));
}

#[tokio::test]
async fn rejects_out_of_range_day_of_week() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    let result = service
        .create_window(
            company_id(),
            professional_id(),
            request(7, hm(8, 0), hm(12, 0)),
        )
        .await;
    assert!(matches!(result, Err(ScheduleError::InvalidDayOfWeek(7))));

    let result = service
        .create_window(
            company_id(),
            professional_id(),
            request(-1, hm(8, 0), hm(12, 0)),
        )
        .await;
    assert!(matches!(result, Err(ScheduleError::InvalidDayOfWeek(-1))));
}

#[tokio::test]
async fn rejects_inverted_or_empty_time_range() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    let inverted = service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(12, 0), hm(8, 0)),
        )
        .await;
    assert!(matches!(inverted, Err(ScheduleError::InvalidTimeRange)));

    let empty = service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(8, 0), hm(8, 0)),
        )
        .await;
    assert!(matches!(empty, Err(ScheduleError::InvalidTimeRange)));
}

#[tokio::test]
async fn rejects_sub_minute_precision() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    let result = service
        .create_window(
            company_id(),
            professional_id(),
            request(
                1,
                NaiveTime::from_hms_opt(8, 0, 30).unwrap(),
                hm(12, 0),
            ),
        )
        .await;
    assert!(matches!(result, Err(ScheduleError::NotMinutePrecision)));
}

#[tokio::test]
async fn rejects_overlapping_windows_on_the_same_day() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(8, 0), hm(12, 0)),
        )
        .await
        .unwrap();

    let overlapping = service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(11, 0), hm(14, 0)),
        )
        .await;
    assert!(matches!(overlapping, Err(ScheduleError::WindowConflict)));
}

#[tokio::test]
async fn allows_disjoint_windows_on_the_same_day_and_any_on_other_days() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(8, 0), hm(12, 0)),
        )
        .await
        .unwrap();

    // Back-to-back is not an overlap under half-open bounds.
    service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(12, 0), hm(17, 0)),
        )
        .await
        .unwrap();

    // Same hours on another weekday.
    service
        .create_window(
            company_id(),
            professional_id(),
            request(2, hm(8, 0), hm(12, 0)),
        )
        .await
        .unwrap();

    let windows = service
        .list_windows(company_id(), professional_id())
        .await
        .unwrap();
    assert_eq!(windows.len(), 3);
}

#[tokio::test]
async fn update_revalidates_against_other_windows() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    let morning = service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(8, 0), hm(12, 0)),
        )
        .await
        .unwrap();
    service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(13, 0), hm(17, 0)),
        )
        .await
        .unwrap();

    // Stretching the morning window into the afternoon one conflicts.
    let stretched = service
        .update_window(
            company_id(),
            professional_id(),
            morning.id,
            UpdateAvailabilityRequest {
                day_of_week: None,
                start_time: None,
                end_time: Some(hm(14, 0)),
            },
        )
        .await;
    assert!(matches!(stretched, Err(ScheduleError::WindowConflict)));

    // Shrinking it is fine; a window may also be revalidated against itself.
    let shrunk = service
        .update_window(
            company_id(),
            professional_id(),
            morning.id,
            UpdateAvailabilityRequest {
                day_of_week: None,
                start_time: Some(hm(9, 0)),
                end_time: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(shrunk.start_time, hm(9, 0));
}

#[tokio::test]
async fn unknown_professional_or_window_reads_as_not_found() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    let result = service
        .create_window(company_id(), Uuid::new_v4(), request(1, hm(8, 0), hm(12, 0)))
        .await;
    assert!(matches!(result, Err(ScheduleError::ProfessionalNotFound)));

    let result = service
        .delete_window(company_id(), professional_id(), Uuid::new_v4())
        .await;
    assert!(matches!(result, Err(ScheduleError::WindowNotFound)));
}

#[tokio::test]
async fn deleting_a_window_removes_it_from_the_schedule() {
    let store = store_with_professional().await;
    let service = ScheduleService::new(store);

    let window = service
        .create_window(
            company_id(),
            professional_id(),
            request(1, hm(8, 0), hm(12, 0)),
        )
        .await
        .unwrap();

    service
        .delete_window(company_id(), professional_id(), window.id)
        .await
        .unwrap();

    let windows = service
        .list_windows(company_id(), professional_id())
        .await
        .unwrap();
    assert!(windows.is_empty());
}

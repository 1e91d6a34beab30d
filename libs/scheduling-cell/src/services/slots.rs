use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use tracing::debug;
use uuid::Uuid;

use shared_models::{Appointment, AvailabilityWindow, Service};

use crate::models::AvailableSlot;

/// Candidate starts are generated on a fixed 15-minute grid regardless of
/// service duration.
pub const SLOT_STEP_MINUTES: i64 = 15;

/// Compute the bookable slots for one professional, date and service.
///
/// Pure function over the collections it is handed; callers supply a
/// consistent, already tenant-scoped snapshot. Every no-data condition
/// (unknown service, non-positive duration, no window for the day's
/// weekday, inverted window bounds) yields an empty list rather than an
/// error, because the booking surface treats "no slots" and "bad input"
/// identically.
///
/// A professional may have several windows on the same weekday; each
/// window contributes candidates independently and the union is returned
/// sorted chronologically, deduplicated by start instant.
pub fn compute_available_slots(
    professional_id: Uuid,
    date: NaiveDate,
    service_id: Uuid,
    windows: &[AvailabilityWindow],
    appointments: &[Appointment],
    services: &[Service],
) -> Vec<AvailableSlot> {
    let Some(service) = services.iter().find(|s| s.id == service_id) else {
        debug!("Unknown service {}, no slots", service_id);
        return Vec::new();
    };
    if service.duration_minutes <= 0 {
        debug!(
            "Service {} has non-positive duration {}, no slots",
            service_id, service.duration_minutes
        );
        return Vec::new();
    }
    let duration = Duration::minutes(service.duration_minutes as i64);

    let day_of_week = day_of_week_index(date);

    // Occupied intervals: this professional's non-cancelled appointments on
    // the queried calendar date, half-open [start, end).
    let occupied: Vec<(DateTime<Utc>, DateTime<Utc>)> = appointments
        .iter()
        .filter(|a| {
            a.professional_id == professional_id
                && a.status.occupies_schedule()
                && a.start_time.date_naive() == date
        })
        .map(|a| (a.start_time, a.end_time))
        .collect();

    let mut slots = Vec::new();

    for window in windows
        .iter()
        .filter(|w| w.professional_id == professional_id && w.day_of_week == day_of_week)
    {
        // A window never spans midnight; inverted bounds produce nothing.
        if window.start_time >= window.end_time {
            continue;
        }

        let window_end = date.and_time(window.end_time).and_utc();
        let mut candidate = date.and_time(window.start_time).and_utc();

        while candidate + duration <= window_end {
            let candidate_end = candidate + duration;

            let has_conflict = occupied
                .iter()
                .any(|&(appt_start, appt_end)| candidate < appt_end && candidate_end > appt_start);

            if !has_conflict {
                slots.push(AvailableSlot {
                    start_time: candidate,
                    end_time: candidate_end,
                    duration_minutes: service.duration_minutes,
                });
            }

            candidate += Duration::minutes(SLOT_STEP_MINUTES);
        }
    }

    slots.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    slots.dedup_by_key(|s| s.start_time);

    debug!(
        "Computed {} available slots for professional {} on {}",
        slots.len(),
        professional_id,
        date
    );
    slots
}

/// Membership test used by booking flows: the slot whose start equals
/// `start`, if that instant is currently bookable.
pub fn slot_for_start(
    professional_id: Uuid,
    date: NaiveDate,
    service_id: Uuid,
    windows: &[AvailabilityWindow],
    appointments: &[Appointment],
    services: &[Service],
    start: DateTime<Utc>,
) -> Option<AvailableSlot> {
    compute_available_slots(
        professional_id,
        date,
        service_id,
        windows,
        appointments,
        services,
    )
    .into_iter()
    .find(|slot| slot.start_time == start)
}

/// Day-of-week as 0 = Sunday .. 6 = Saturday.
pub fn day_of_week_index(date: NaiveDate) -> i32 {
    match date.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

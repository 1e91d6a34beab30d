use shared_models::AppointmentStatus;

use crate::models::BookingError;

/// Allowed status moves:
///
/// ```text
/// pending -> confirmed -> completed
///    \          /
///     -> cancelled
/// ```
///
/// `completed` and `cancelled` are terminal. Re-asserting the current
/// status is a no-op and always allowed.
pub fn validate_transition(
    from: AppointmentStatus,
    to: AppointmentStatus,
) -> Result<(), BookingError> {
    use AppointmentStatus::*;

    if from == to {
        return Ok(());
    }

    let allowed = matches!(
        (from, to),
        (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
    );

    if allowed {
        Ok(())
    } else {
        Err(BookingError::InvalidStatusTransition { from, to })
    }
}

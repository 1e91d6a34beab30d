pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    AppointmentSearchQuery, AppointmentSummary, BookAppointmentRequest, BookingError,
    CancelAppointmentRequest, RescheduleAppointmentRequest, UpdateAppointmentRequest,
};

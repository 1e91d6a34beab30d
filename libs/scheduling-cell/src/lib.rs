pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::AvailableSlot;
pub use services::slots::{compute_available_slots, slot_for_start, SLOT_STEP_MINUTES};

use axum::{
    routing::{get, patch, post},
    Router,
};

use shared_store::Store;

use crate::handlers;

pub fn booking_routes(store: Store) -> Router {
    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/", get(handlers::search_appointments))
        .route("/summary", get(handlers::get_appointment_summary))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}", patch(handlers::update_appointment))
        .route(
            "/{appointment_id}/cancel",
            post(handlers::cancel_appointment),
        )
        .route(
            "/{appointment_id}/reschedule",
            post(handlers::reschedule_appointment),
        )
        .with_state(store)
}

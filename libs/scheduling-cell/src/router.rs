use axum::{routing::get, Router};

use shared_store::Store;

use crate::handlers;

/// Mounted under `/professionals` next to the professional-cell routes.
pub fn scheduling_routes(store: Store) -> Router {
    Router::new()
        .route(
            "/{professional_id}/available-slots",
            get(handlers::get_available_slots),
        )
        .with_state(store)
}

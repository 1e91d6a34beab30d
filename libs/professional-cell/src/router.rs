use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::Store;

use crate::handlers;

pub fn professional_routes(store: Store) -> Router {
    Router::new()
        // Professional profile management
        .route("/", post(handlers::create_professional))
        .route("/", get(handlers::list_professionals))
        .route("/{professional_id}", get(handlers::get_professional))
        .route("/{professional_id}", put(handlers::update_professional))
        .route("/{professional_id}", delete(handlers::delete_professional))
        // Offered services
        .route(
            "/{professional_id}/services",
            put(handlers::assign_services),
        )
        .route(
            "/{professional_id}/services",
            get(handlers::get_professional_services),
        )
        // Weekly availability management
        .route(
            "/{professional_id}/availability",
            post(handlers::create_availability),
        )
        .route(
            "/{professional_id}/availability",
            get(handlers::get_availability),
        )
        .route(
            "/{professional_id}/availability/{window_id}",
            put(handlers::update_availability),
        )
        .route(
            "/{professional_id}/availability/{window_id}",
            delete(handlers::delete_availability),
        )
        .with_state(store)
}

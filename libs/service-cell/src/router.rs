use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::Store;

use crate::handlers;

pub fn service_routes(store: Store) -> Router {
    Router::new()
        .route("/", post(handlers::create_service))
        .route("/", get(handlers::list_services))
        .route("/{service_id}", get(handlers::get_service))
        .route("/{service_id}", put(handlers::update_service))
        .route("/{service_id}", delete(handlers::delete_service))
        .route(
            "/{service_id}/professionals",
            get(handlers::get_service_professionals),
        )
        .with_state(store)
}

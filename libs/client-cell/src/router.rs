use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_store::Store;

use crate::handlers;

pub fn client_routes(store: Store) -> Router {
    Router::new()
        .route("/", post(handlers::create_client))
        .route("/", get(handlers::list_clients))
        .route("/{client_id}", get(handlers::get_client))
        .route("/{client_id}", put(handlers::update_client))
        .route("/{client_id}", delete(handlers::delete_client))
        .with_state(store)
}

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use client_cell::router::client_routes;
use professional_cell::router::professional_routes;
use scheduling_cell::router::scheduling_routes;
use service_cell::router::service_routes;
use shared_store::Store;

pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/", get(|| async { "Bookwell API is running!" }))
        .nest("/clients", client_routes(store.clone()))
        .nest("/services", service_routes(store.clone()))
        // Slot queries live next to the professional resource they read.
        .nest("/professionals", professional_routes(store.clone()))
        .nest("/professionals", scheduling_routes(store.clone()))
        .nest("/appointments", booking_routes(store))
}

//! Hotels server - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/hotels", configure_hotel_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la consultazione degli hotel
fn configure_hotel_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::{get_hotel_rooms, list_hotels};

    Router::new()
        .route("/", get(list_hotels))
        .route("/{hotel_id}", get(get_hotel_rooms))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod hotel;

// Re-exports per facilitare l'import
pub use hotel::{
    HotelServiceError, check_hotel_access, get_hotel_rooms, get_hotel_with_rooms, get_hotels,
    list_hotels,
};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}

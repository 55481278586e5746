//! Hotel services - Accesso agli hotel per utenti con biglietto idoneo
//!
//! Ogni richiesta segue lo stesso percorso lineare: controllo di idoneità
//! (iscrizione -> biglietto -> stato e tipo del biglietto), lettura dei dati,
//! risposta. Gli errori del service sono tradotti in codici HTTP dagli handler.

use crate::core::{AppError, AppState, AuthenticatedUser};
use crate::dtos::{HotelDTO, HotelWithRoomsDTO};
use crate::entities::{Hotel, Room};
use crate::repositories::{EnrollmentStore, TicketStore};
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// Esiti negativi delle operazioni sugli hotel
#[derive(Debug, Error)]
pub enum HotelServiceError {
    /// Iscrizione, biglietto o hotel mancante
    #[error("resource not found")]
    NotFound,
    /// Biglietto non pagato, remoto o senza hotel incluso
    #[error("you must pay to have access")]
    PaymentRequired,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Verifica che l'utente possa consultare gli hotel.
///
/// Le letture si interrompono al primo esito negativo: senza iscrizione il
/// biglietto non viene nemmeno cercato.
#[instrument(skip(enrollments, tickets), fields(user_id = %user_id))]
pub async fn check_hotel_access(
    enrollments: &dyn EnrollmentStore,
    tickets: &dyn TicketStore,
    user_id: i32,
) -> Result<(), HotelServiceError> {
    let enrollment = enrollments.find_by_user_id(&user_id).await?.ok_or_else(|| {
        debug!("User has no enrollment");
        HotelServiceError::NotFound
    })?;

    let ticket = tickets
        .find_by_enrollment_id(&enrollment.id)
        .await?
        .ok_or_else(|| {
            debug!("Enrollment {} has no ticket", enrollment.id);
            HotelServiceError::NotFound
        })?;

    if !ticket.is_paid() || !ticket.ticket_type.grants_hotel_access() {
        debug!(
            "Ticket {} does not grant hotel access (status {:?}, remote {}, hotel {})",
            ticket.ticket.id,
            ticket.ticket.status,
            ticket.ticket_type.is_remote,
            ticket.ticket_type.includes_hotel
        );
        return Err(HotelServiceError::PaymentRequired);
    }

    Ok(())
}

/// Tutti gli hotel, in ordine di creazione
#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn get_hotels(state: &AppState, user_id: i32) -> Result<Vec<Hotel>, HotelServiceError> {
    check_hotel_access(state.enrollments.as_ref(), state.tickets.as_ref(), user_id).await?;

    Ok(state.hotels.find_all().await?)
}

/// Un hotel con tutte le sue stanze.
///
/// `hotel_id` arriva grezzo dal path: viene convertito solo dopo il controllo
/// di idoneità, quindi un utente non idoneo riceve sempre 404/402.
#[instrument(skip(state), fields(user_id = %user_id, hotel_id = %hotel_id))]
pub async fn get_hotel_with_rooms(
    state: &AppState,
    user_id: i32,
    hotel_id: &str,
) -> Result<(Hotel, Vec<Room>), HotelServiceError> {
    check_hotel_access(state.enrollments.as_ref(), state.tickets.as_ref(), user_id).await?;

    let hotel_id = hotel_id
        .parse::<i32>()
        .map_err(|e| HotelServiceError::BadRequest(format!("invalid hotel id: {e}")))?;

    state
        .hotels
        .find_with_rooms(&hotel_id)
        .await?
        .ok_or(HotelServiceError::NotFound)
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_hotels(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<AuthenticatedUser>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<Json<Vec<HotelDTO>>, AppError> {
    debug!("Listing hotels");
    match get_hotels(&state, current_user.user_id).await {
        Ok(hotels) => {
            info!("Returning {} hotels", hotels.len());
            Ok(Json(hotels.into_iter().map(HotelDTO::from).collect()))
        }
        Err(HotelServiceError::NotFound) => {
            warn!("Enrollment or ticket not found");
            Err(AppError::not_found("Enrollment or ticket not found"))
        }
        Err(err) => {
            if let HotelServiceError::Database(ref db_err) = err {
                error!("Database error while listing hotels: {:?}", db_err);
            } else {
                warn!("Hotel access denied: {}", err);
            }
            Err(AppError::payment_required("You must pay to have access!"))
        }
    }
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, hotel_id = %hotel_id))]
pub async fn get_hotel_rooms(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<AuthenticatedUser>,
    Path(hotel_id): Path<String>, // parametro dalla URL /hotels/{hotelId}
) -> Result<Json<HotelWithRoomsDTO>, AppError> {
    debug!("Fetching hotel with rooms");
    let result = get_hotel_with_rooms(&state, current_user.user_id, &hotel_id).await;

    match result {
        Ok(hotel) => {
            info!("Returning hotel {} with {} rooms", hotel.0.id, hotel.1.len());
            Ok(Json(HotelWithRoomsDTO::from(hotel)))
        }
        Err(HotelServiceError::NotFound) => {
            warn!("Enrollment, ticket or hotel not found");
            Err(AppError::not_found("Resource not found"))
        }
        Err(HotelServiceError::PaymentRequired) => {
            warn!("Hotel access denied");
            Err(AppError::payment_required("You must pay to have access!"))
        }
        Err(HotelServiceError::BadRequest(details)) => {
            warn!("Bad request: {}", details);
            Err(AppError::bad_request("Bad request").with_details(details))
        }
        Err(HotelServiceError::Database(db_err)) => {
            error!("Database error while fetching hotel: {:?}", db_err);
            Err(AppError::bad_request("Bad request"))
        }
    }
}

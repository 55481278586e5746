#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, SubsecRound, Utc};
use dashmap::DashMap;
use hotels_server::core::{AppState, encode_jwt};
use hotels_server::entities::{
    Enrollment, Hotel, Room, Session, Ticket, TicketStatus, TicketType, TicketWithType,
};
use hotels_server::repositories::{EnrollmentStore, HotelStore, SessionStore, TicketStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Store in memoria che implementa tutti i trait di lettura usati dal server.
///
/// Le chiavi seguono i vincoli dello schema: una iscrizione per utente,
/// un biglietto per iscrizione.
#[derive(Default)]
pub struct MemoryStore {
    next_id: AtomicI32,
    hotels: DashMap<i32, Hotel>,
    rooms: DashMap<i32, Room>,
    enrollments_by_user: DashMap<i32, Enrollment>,
    tickets_by_enrollment: DashMap<i32, TicketWithType>,
    sessions_by_token: DashMap<String, Session>,
}

/// Come le colonne TIMESTAMP(3): precisione al millisecondo
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl MemoryStore {
    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Crea una sessione per l'utente e ritorna il token JWT corrispondente
    pub fn create_session(&self, user_id: i32) -> String {
        let token = encode_jwt(user_id, JWT_SECRET).expect("Failed to create JWT token");
        self.insert_session(user_id, &token);
        token
    }

    /// Registra una sessione con un token già firmato
    pub fn insert_session(&self, user_id: i32, token: &str) -> Session {
        let session = Session {
            id: self.next_id(),
            user_id,
            token: token.to_string(),
        };
        self.sessions_by_token.insert(token.to_string(), session.clone());
        session
    }

    pub fn create_enrollment(&self, user_id: i32) -> Enrollment {
        let now = now_millis();
        let enrollment = Enrollment {
            id: self.next_id(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        self.enrollments_by_user.insert(user_id, enrollment.clone());
        enrollment
    }

    pub fn create_ticket_type(&self, is_remote: bool, includes_hotel: bool) -> TicketType {
        TicketType {
            id: self.next_id(),
            name: format!("ticket remote={is_remote} hotel={includes_hotel}"),
            price: 300,
            is_remote,
            includes_hotel,
        }
    }

    pub fn create_ticket(
        &self,
        enrollment_id: i32,
        ticket_type: &TicketType,
        status: TicketStatus,
    ) -> Ticket {
        let now = now_millis();
        let ticket = Ticket {
            id: self.next_id(),
            enrollment_id,
            ticket_type_id: ticket_type.id,
            status,
            created_at: now,
            updated_at: now,
        };
        self.tickets_by_enrollment.insert(
            enrollment_id,
            TicketWithType {
                ticket: ticket.clone(),
                ticket_type: ticket_type.clone(),
            },
        );
        ticket
    }

    pub fn create_hotel(&self, name: &str) -> Hotel {
        let now = now_millis();
        let hotel = Hotel {
            id: self.next_id(),
            name: name.to_string(),
            image: format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
            created_at: now,
            updated_at: now,
        };
        self.hotels.insert(hotel.id, hotel.clone());
        hotel
    }

    pub fn create_room(&self, hotel_id: i32, name: &str, capacity: i32) -> Room {
        let now = now_millis();
        let room = Room {
            id: self.next_id(),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        self.rooms.insert(room.id, room.clone());
        room
    }

    /// Utente con iscrizione e biglietto del tipo indicato; ritorna il token
    pub fn create_user_with_ticket(
        &self,
        user_id: i32,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> String {
        let token = self.create_session(user_id);
        let enrollment = self.create_enrollment(user_id);
        let ticket_type = self.create_ticket_type(is_remote, includes_hotel);
        self.create_ticket(enrollment.id, &ticket_type, status);
        token
    }
}

#[async_trait]
impl HotelStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Hotel>, sqlx::Error> {
        let mut hotels: Vec<Hotel> = self.hotels.iter().map(|h| h.value().clone()).collect();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &i32,
    ) -> Result<Option<(Hotel, Vec<Room>)>, sqlx::Error> {
        let Some(hotel) = self.hotels.get(hotel_id).map(|h| h.value().clone()) else {
            return Ok(None);
        };
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| r.hotel_id == *hotel_id)
            .map(|r| r.value().clone())
            .collect();
        rooms.sort_by_key(|r| r.id);
        Ok(Some((hotel, rooms)))
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    async fn find_by_user_id(&self, user_id: &i32) -> Result<Option<Enrollment>, sqlx::Error> {
        Ok(self.enrollments_by_user.get(user_id).map(|e| e.value().clone()))
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: &i32,
    ) -> Result<Option<TicketWithType>, sqlx::Error> {
        Ok(self
            .tickets_by_enrollment
            .get(enrollment_id)
            .map(|t| t.value().clone()))
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, sqlx::Error> {
        Ok(self.sessions_by_token.get(token).map(|s| s.value().clone()))
    }
}

/// Crea un AppState per i test sopra uno store in memoria
///
/// # Returns
/// Lo store (per popolare i dati) e l'AppState che lo usa
pub fn create_test_state() -> (Arc<MemoryStore>, Arc<AppState>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::with_stores(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        JWT_SECRET.to_string(),
    );
    (store, Arc::new(state))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = hotels_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

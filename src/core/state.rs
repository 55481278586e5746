//! Application State - Stato globale dell'applicazione
//!
//! Contiene gli store e la configurazione condivisa necessari per gestire le richieste.
//! Gli store sono trait object: in produzione sono i repository MySQL, nei test
//! possono essere sostituiti da implementazioni in memoria.

use crate::repositories::{
    EnrollmentRepository, EnrollmentStore, HotelRepository, HotelStore, SessionRepository,
    SessionStore, TicketRepository, TicketStore,
};
use sqlx::MySqlPool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Store per hotel e stanze
    pub hotels: Arc<dyn HotelStore>,

    /// Store per le iscrizioni
    pub enrollments: Arc<dyn EnrollmentStore>,

    /// Store per i biglietti (con il tipo)
    pub tickets: Arc<dyn TicketStore>,

    /// Store per le sessioni di login
    pub sessions: Arc<dyn SessionStore>,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni MySQL condiviso
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    pub fn new(pool: MySqlPool, jwt_secret: String) -> Self {
        Self {
            hotels: Arc::new(HotelRepository::new(pool.clone())),
            enrollments: Arc::new(EnrollmentRepository::new(pool.clone())),
            tickets: Arc::new(TicketRepository::new(pool.clone())),
            sessions: Arc::new(SessionRepository::new(pool)),
            jwt_secret,
        }
    }

    /// Crea un AppState con store arbitrari (ad esempio in memoria per i test)
    pub fn with_stores(
        hotels: Arc<dyn HotelStore>,
        enrollments: Arc<dyn EnrollmentStore>,
        tickets: Arc<dyn TicketStore>,
        sessions: Arc<dyn SessionStore>,
        jwt_secret: String,
    ) -> Self {
        Self {
            hotels,
            enrollments,
            tickets,
            sessions,
            jwt_secret,
        }
    }
}

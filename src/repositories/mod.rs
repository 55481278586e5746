//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le letture di database per una specifica entità e
//! implementa il trait di store corrispondente definito in `traits`.
//!
//! Le query usano `sqlx::query_as::<_, T>` con `#[derive(sqlx::FromRow)]`: il controllo
//! avviene a run-time, quindi il crate compila anche senza un database raggiungibile.
//! Lo schema di riferimento è in `migrations/`.

pub mod enrollment;
pub mod hotel;
pub mod session;
pub mod ticket;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{EnrollmentStore, HotelStore, SessionStore, TicketStore};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use enrollment::EnrollmentRepository;
pub use hotel::HotelRepository;
pub use session::SessionRepository;
pub use ticket::TicketRepository;

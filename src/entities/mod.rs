//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella; `TicketWithType` è il risultato di una join.

pub mod enrollment;
pub mod enums;
pub mod hotel;
pub mod room;
pub mod session;
pub mod ticket;

// Re-exports per facilitare l'import
pub use enrollment::Enrollment;
pub use enums::TicketStatus;
pub use hotel::Hotel;
pub use room::Room;
pub use session::Session;
pub use ticket::{Ticket, TicketType, TicketWithType};

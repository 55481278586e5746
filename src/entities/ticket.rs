//! Ticket entities - Biglietti e tipologie di biglietto

use super::enums::TicketStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketType {
    /// Un tipo di biglietto dà accesso agli hotel solo se è in presenza e include l'hotel
    pub fn grants_hotel_access(&self) -> bool {
        !self.is_remote && self.includes_hotel
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Ticket {
    pub id: i32,
    pub enrollment_id: i32,
    pub ticket_type_id: i32,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Biglietto insieme al suo tipo, come restituito dalla join tickets/ticket_types
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

impl TicketWithType {
    pub fn is_paid(&self) -> bool {
        self.ticket.status != TicketStatus::Reserved
    }
}

//! TicketRepository - Repository per i biglietti e il loro tipo

use super::TicketStore;
use crate::entities::{Ticket, TicketStatus, TicketType, TicketWithType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

/// Riga piatta della join tickets/ticket_types
#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    type_name: String,
    type_price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl From<TicketRow> for TicketWithType {
    fn from(row: TicketRow) -> Self {
        Self {
            ticket: Ticket {
                id: row.id,
                enrollment_id: row.enrollment_id,
                ticket_type_id: row.ticket_type_id,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
        }
    }
}

pub struct TicketRepository {
    connection_pool: MySqlPool,
}

impl TicketRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl TicketStore for TicketRepository {
    #[instrument(skip(self), fields(enrollment_id = %enrollment_id))]
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: &i32,
    ) -> Result<Option<TicketWithType>, Error> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT
                t.id,
                t.enrollment_id,
                t.ticket_type_id,
                t.status,
                t.created_at,
                t.updated_at,
                tt.name AS type_name,
                tt.price AS type_price,
                tt.is_remote,
                tt.includes_hotel
            FROM tickets t
            INNER JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = ?
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if row.is_none() {
            debug!("No ticket for enrollment");
        }

        Ok(row.map(TicketWithType::from))
    }
}

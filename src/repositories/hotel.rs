//! HotelRepository - Repository per hotel e stanze

use super::HotelStore;
use crate::entities::{Hotel, Room};
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

// HOTEL REPOSITORY
pub struct HotelRepository {
    connection_pool: MySqlPool,
}

impl HotelRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Stanze di un hotel, in ordine di creazione
    #[instrument(skip(self), fields(hotel_id = %hotel_id))]
    pub async fn find_rooms_by_hotel_id(&self, hotel_id: &i32) -> Result<Vec<Room>, Error> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = ?
            ORDER BY id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} rooms", rooms.len());
        Ok(rooms)
    }
}

#[async_trait]
impl HotelStore for HotelRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Hotel>, Error> {
        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} hotels", hotels.len());
        Ok(hotels)
    }

    #[instrument(skip(self), fields(hotel_id = %hotel_id))]
    async fn find_with_rooms(&self, hotel_id: &i32) -> Result<Option<(Hotel, Vec<Room>)>, Error> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = ?",
        )
        .bind(hotel_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        // niente hotel -> niente query sulle stanze
        let Some(hotel) = hotel else {
            debug!("Hotel not found");
            return Ok(None);
        };

        let rooms = self.find_rooms_by_hotel_id(&hotel.id).await?;
        Ok(Some((hotel, rooms)))
    }
}

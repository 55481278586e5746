//! Store traits
//!
//! This module defines the read interfaces the hotel services depend on.
//! They are object safe so that `AppState` can hold any implementation
//! behind an `Arc<dyn ...>`: the MySQL repositories in production, in-memory
//! stores in tests.

use crate::entities::{Enrollment, Hotel, Room, Session, TicketWithType};
use async_trait::async_trait;

/// Read access to hotels and their rooms
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Returns every hotel ordered by primary key
    ///
    /// # Returns
    /// * `Ok(Vec<Hotel>)` - All hotels (can be empty)
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_all(&self) -> Result<Vec<Hotel>, sqlx::Error>;

    /// Reads a hotel together with its rooms
    ///
    /// # Arguments
    /// * `hotel_id` - Primary key of the hotel
    ///
    /// # Returns
    /// * `Ok(Some((Hotel, Vec<Room>)))` - Hotel found, rooms ordered by primary key
    /// * `Ok(None)` - No hotel with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_with_rooms(&self, hotel_id: &i32) -> Result<Option<(Hotel, Vec<Room>)>, sqlx::Error>;
}

/// Read access to enrollments
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Reads the enrollment owned by a user
    ///
    /// # Returns
    /// * `Ok(Some(Enrollment))` - The user has started registration
    /// * `Ok(None)` - No enrollment for that user
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_by_user_id(&self, user_id: &i32) -> Result<Option<Enrollment>, sqlx::Error>;
}

/// Read access to tickets
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Reads the ticket bought for an enrollment, joined with its ticket type
    ///
    /// # Returns
    /// * `Ok(Some(TicketWithType))` - Ticket found
    /// * `Ok(None)` - No ticket for that enrollment
    /// * `Err(sqlx::Error)` - Error during reading
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: &i32,
    ) -> Result<Option<TicketWithType>, sqlx::Error>;
}

/// Read access to login sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the session that owns exactly this token
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, sqlx::Error>;
}

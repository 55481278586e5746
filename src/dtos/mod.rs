//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod hotel;
mod timestamp;

pub use hotel::{HotelDTO, HotelWithRoomsDTO, RoomDTO};

//! Hotel DTOs - Rappresentazione JSON di hotel e stanze
//!
//! I nomi dei campi seguono il formato camelCase atteso dal frontend; la lista
//! delle stanze viene esposta con la chiave `Rooms`.

use super::timestamp;
use crate::entities::{Hotel, Room};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelDTO {
    pub id: i32,
    pub name: String,
    pub image: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDTO {
    fn from(value: Hotel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomDTO {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDTO {
    fn from(value: Room) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Hotel con le sue stanze annidate, usato da GET /hotels/{hotelId}
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HotelWithRoomsDTO {
    #[serde(flatten)]
    pub hotel: HotelDTO,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomDTO>,
}

impl From<(Hotel, Vec<Room>)> for HotelWithRoomsDTO {
    fn from((hotel, rooms): (Hotel, Vec<Room>)) -> Self {
        Self {
            hotel: HotelDTO::from(hotel),
            rooms: rooms.into_iter().map(RoomDTO::from).collect(),
        }
    }
}

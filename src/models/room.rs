use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub floor: i64,
}

/// Room joined with the name of the hotel it belongs to, for the global listing.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct RoomWithHotel {
    pub id: i64,
    pub room_number: String,
    pub floor: i64,
    pub hotel_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewRoom {
    pub hotel_id: i64,
    #[validate(length(min = 1))]
    pub room_number: String,
    pub floor: i64,
}

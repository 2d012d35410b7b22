use sqlx::SqlitePool;

use crate::models::room::{NewRoom, Room, RoomWithHotel};

pub async fn list_for_hotel(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        "SELECT id, room_number, floor FROM rooms WHERE hotel_id = ?",
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await
}

pub async fn list_with_hotel(pool: &SqlitePool) -> Result<Vec<RoomWithHotel>, sqlx::Error> {
    sqlx::query_as::<_, RoomWithHotel>(
        r#"
        SELECT r.id, r.room_number, r.floor, h.name AS hotel_name
        FROM rooms r
        JOIN hotels h ON r.hotel_id = h.id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, room: &NewRoom) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO rooms (hotel_id, room_number, floor) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(room.hotel_id)
    .bind(&room.room_number)
    .bind(room.floor)
    .fetch_one(pool)
    .await
}

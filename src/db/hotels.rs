use sqlx::SqlitePool;

use crate::models::hotel::{Hotel, NewHotel};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>(
        "SELECT id, name, address, star_rating, contact_number, email, website, description, amenities
         FROM hotels",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, hotel: &NewHotel) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO hotels (name, address, star_rating, contact_number, email, website, description, amenities)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&hotel.name)
    .bind(&hotel.address)
    .bind(hotel.star_rating)
    .bind(&hotel.contact_number)
    .bind(&hotel.email)
    .bind(&hotel.website)
    .bind(&hotel.description)
    .bind(&hotel.amenities)
    .fetch_one(pool)
    .await
}

/// Deletes a hotel by id. Deleting an id that does not exist is not an error.
pub async fn delete(pool: &SqlitePool, hotel_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM hotels WHERE id = ?")
        .bind(hotel_id)
        .execute(pool)
        .await?;
    Ok(())
}

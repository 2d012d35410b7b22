use sqlx::SqlitePool;

use crate::models::booking::{BookingSummary, CreateBooking};

/// All bookings, newest first, with the room numbers for each booking
/// aggregated into a single ", "-separated field.
pub async fn list(pool: &SqlitePool) -> Result<Vec<BookingSummary>, sqlx::Error> {
    sqlx::query_as::<_, BookingSummary>(
        r#"
        SELECT b.id, c.name AS customer_name, b.check_in, b.check_out,
               GROUP_CONCAT(r.room_number, ', ') AS room_numbers, h.name AS hotel_name
        FROM bookings b
        JOIN customers c ON b.customer_id = c.id
        JOIN booking_rooms br ON b.id = br.booking_id
        JOIN rooms r ON br.room_id = r.id
        JOIN hotels h ON r.hotel_id = h.id
        GROUP BY b.id, c.name, b.check_in, b.check_out, h.name
        ORDER BY b.id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Creates the customer, the booking, one room assignment per requested room,
/// and the payment in a single transaction. A failure at any step rolls the
/// whole sequence back.
pub async fn create(pool: &SqlitePool, booking: &CreateBooking) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let customer_id: i64 = sqlx::query_scalar("INSERT INTO customers (name) VALUES (?) RETURNING id")
        .bind(&booking.customer_name)
        .fetch_one(&mut *tx)
        .await?;

    let booking_date = chrono::Local::now().date_naive();
    let booking_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO bookings (customer_id, booking_date, check_in, check_out)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(customer_id)
    .bind(booking_date)
    .bind(booking.check_in_date)
    .bind(booking.check_out_date)
    .fetch_one(&mut *tx)
    .await?;

    for room_id in &booking.room_ids {
        sqlx::query("INSERT INTO booking_rooms (booking_id, room_id) VALUES (?, ?)")
            .bind(booking_id)
            .bind(room_id)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("INSERT INTO payments (booking_id, payment_method) VALUES (?, ?)")
        .bind(booking_id)
        .bind(&booking.payment_method)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(booking_id)
}

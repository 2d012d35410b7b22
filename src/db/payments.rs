use sqlx::SqlitePool;

use crate::models::payment::Payment;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        r#"
        SELECT p.id, p.booking_id, c.name AS customer_name, p.payment_method, b.booking_date
        FROM payments p
        JOIN bookings b ON p.booking_id = b.id
        JOIN customers c ON b.customer_id = c.id
        ORDER BY p.id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

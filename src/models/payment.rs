use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub customer_name: String,
    pub payment_method: String,
    pub booking_date: chrono::NaiveDate,
}

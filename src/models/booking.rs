use serde::{Deserialize, Serialize};
use validator::Validate;

/// One row of the booking listing. `room_numbers` holds every room number tied
/// to the booking, joined with ", ".
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookingSummary {
    pub id: i64,
    pub customer_name: String,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub room_numbers: String,
    pub hotel_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBooking {
    #[validate(length(min = 1))]
    pub customer_name: String,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    #[validate(length(min = 1))]
    pub room_ids: Vec<i64>,
    #[validate(length(min = 1))]
    pub payment_method: String,
}

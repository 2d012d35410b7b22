use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub star_rating: i64,
    pub contact_number: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub amenities: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewHotel {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(range(min = 1, max = 5))]
    pub star_rating: i64,
    #[validate(length(min = 1))]
    pub contact_number: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub amenities: Option<String>,
}

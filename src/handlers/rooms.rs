use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db;
use crate::errors::ApiError;
use crate::models::room::NewRoom;

pub async fn get_rooms(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let rooms = db::rooms::list_with_hotel(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

pub async fn add_room(
    pool: web::Data<SqlitePool>,
    body: web::Json<NewRoom>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let room_id = db::rooms::insert(pool.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "room_id": room_id,
        "message": "Room added successfully"
    })))
}

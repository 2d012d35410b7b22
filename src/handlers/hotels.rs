use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db;
use crate::errors::ApiError;
use crate::models::hotel::NewHotel;

pub async fn get_hotels(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let hotels = db::hotels::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn add_hotel(
    pool: web::Data<SqlitePool>,
    body: web::Json<NewHotel>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let hotel_id = db::hotels::insert(pool.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "hotel_id": hotel_id,
        "message": "Hotel added successfully"
    })))
}

pub async fn remove_hotel(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let hotel_id = path.into_inner();

    db::hotels::delete(pool.get_ref(), hotel_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": format!("Hotel {hotel_id} removed successfully")
    })))
}

pub async fn get_hotel_rooms(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let rooms = db::rooms::list_for_hotel(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

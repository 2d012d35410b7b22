use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::ApiError;

pub async fn get_payments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let payments = db::payments::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(payments))
}

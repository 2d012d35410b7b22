use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Plain credential comparison against the configured admin pair. No sessions
/// or tokens are issued.
pub async fn login(
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.username == config.admin_username && body.password == config.admin_password {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Login successful"
        })))
    } else {
        Err(ApiError::Unauthorized)
    }
}

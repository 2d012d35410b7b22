use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db;
use crate::errors::ApiError;
use crate::models::booking::CreateBooking;

pub async fn get_bookings(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let bookings = db::bookings::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn create_booking(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    if body.check_in_date >= body.check_out_date {
        return Err(ApiError::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }

    let booking_id = db::bookings::create(pool.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "booking_id": booking_id,
        "message": "Booking created successfully"
    })))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use sqlx::SqlitePool;

    use crate::db;
    use crate::handlers;
    use crate::models::hotel::NewHotel;
    use crate::models::room::NewRoom;

    async fn test_app(
        pool: SqlitePool,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(handlers::configure),
        )
        .await
    }

    /// One hotel with rooms "101" and "102"; returns the room ids.
    async fn seed_hotel_with_rooms(pool: &SqlitePool) -> (i64, i64) {
        let hotel_id = db::hotels::insert(
            pool,
            &NewHotel {
                name: "Grand Plaza".to_string(),
                address: "1 Main St".to_string(),
                star_rating: 4,
                contact_number: "555-0100".to_string(),
                email: None,
                website: None,
                description: None,
                amenities: None,
            },
        )
        .await
        .unwrap();

        let mut ids = Vec::new();
        for number in ["101", "102"] {
            let id = db::rooms::insert(
                pool,
                &NewRoom {
                    hotel_id,
                    room_number: number.to_string(),
                    floor: 1,
                },
            )
            .await
            .unwrap();
            ids.push(id);
        }
        (ids[0], ids[1])
    }

    async fn table_count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn jane_doe(room_ids: &[i64]) -> serde_json::Value {
        serde_json::json!({
            "customer_name": "Jane Doe",
            "check_in_date": "2025-07-01",
            "check_out_date": "2025-07-05",
            "room_ids": room_ids,
            "payment_method": "Card"
        })
    }

    #[actix_web::test]
    async fn booking_creates_all_related_records() {
        let pool = db::test_pool().await;
        let (first, second) = seed_hotel_with_rooms(&pool).await;
        let app = test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/booking/create")
            .set_json(jane_doe(&[first, second]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: serde_json::Value = test::read_body_json(resp).await;
        let booking_id = created["booking_id"].as_i64().unwrap();

        assert_eq!(table_count(&pool, "customers").await, 1);
        assert_eq!(table_count(&pool, "bookings").await, 1);
        assert_eq!(table_count(&pool, "booking_rooms").await, 2);
        assert_eq!(table_count(&pool, "payments").await, 1);

        let req = test::TestRequest::get().uri("/bookings").to_request();
        let bookings: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let bookings = bookings.as_array().unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0]["id"], booking_id);
        assert_eq!(bookings[0]["customer_name"], "Jane Doe");
        assert_eq!(bookings[0]["check_in"], "2025-07-01");
        assert_eq!(bookings[0]["check_out"], "2025-07-05");
        assert_eq!(bookings[0]["room_numbers"], "101, 102");
        assert_eq!(bookings[0]["hotel_name"], "Grand Plaza");
    }

    #[actix_web::test]
    async fn booking_listing_is_newest_first() {
        let pool = db::test_pool().await;
        let (first, second) = seed_hotel_with_rooms(&pool).await;
        let app = test_app(pool).await;

        for room_id in [first, second] {
            let req = test::TestRequest::post()
                .uri("/booking/create")
                .set_json(jane_doe(&[room_id]))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
        }

        let req = test::TestRequest::get().uri("/bookings").to_request();
        let bookings: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let bookings = bookings.as_array().unwrap();
        assert_eq!(bookings.len(), 2);
        assert!(bookings[0]["id"].as_i64().unwrap() > bookings[1]["id"].as_i64().unwrap());
    }

    #[actix_web::test]
    async fn missing_room_ids_is_rejected_without_writes() {
        let pool = db::test_pool().await;
        seed_hotel_with_rooms(&pool).await;
        let app = test_app(pool.clone()).await;

        let mut body = jane_doe(&[]);
        body.as_object_mut().unwrap().remove("room_ids");
        let req = test::TestRequest::post()
            .uri("/booking/create")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        assert_eq!(table_count(&pool, "customers").await, 0);
        assert_eq!(table_count(&pool, "bookings").await, 0);
        assert_eq!(table_count(&pool, "payments").await, 0);
    }

    #[actix_web::test]
    async fn empty_room_ids_is_rejected() {
        let pool = db::test_pool().await;
        seed_hotel_with_rooms(&pool).await;
        let app = test_app(pool).await;

        let req = test::TestRequest::post()
            .uri("/booking/create")
            .set_json(jane_doe(&[]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn check_out_before_check_in_is_rejected() {
        let pool = db::test_pool().await;
        let (first, _) = seed_hotel_with_rooms(&pool).await;
        let app = test_app(pool).await;

        let mut body = jane_doe(&[first]);
        body["check_out_date"] = serde_json::json!("2025-06-30");
        let req = test::TestRequest::post()
            .uri("/booking/create")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn failed_booking_rolls_back_every_step() {
        let pool = db::test_pool().await;
        let (first, _) = seed_hotel_with_rooms(&pool).await;
        let app = test_app(pool.clone()).await;

        // Second room id does not exist, so the assignment insert fails after
        // the customer and booking rows are already written in the transaction.
        let req = test::TestRequest::post()
            .uri("/booking/create")
            .set_json(jane_doe(&[first, 9999]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        assert_eq!(table_count(&pool, "customers").await, 0);
        assert_eq!(table_count(&pool, "bookings").await, 0);
        assert_eq!(table_count(&pool, "booking_rooms").await, 0);
        assert_eq!(table_count(&pool, "payments").await, 0);
    }
}

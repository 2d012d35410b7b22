use actix_web::web;

pub mod auth;
pub mod bookings;
pub mod hotels;
pub mod payments;
pub mod rooms;

/// Route table, shared between `main` and the test harness.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(auth::login))
        .service(
            web::scope("/hotels")
                .route("", web::get().to(hotels::get_hotels))
                .route("/add", web::post().to(hotels::add_hotel))
                .route("/remove/{id}", web::delete().to(hotels::remove_hotel))
                .route("/{id}/rooms", web::get().to(hotels::get_hotel_rooms)),
        )
        .route("/rooms", web::get().to(rooms::get_rooms))
        .route("/rooms/add", web::post().to(rooms::add_room))
        .route("/bookings", web::get().to(bookings::get_bookings))
        .route("/booking/create", web::post().to(bookings::create_booking))
        .route("/payments", web::get().to(payments::get_payments));
}

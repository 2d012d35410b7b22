use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod db;
mod errors;
mod handlers;
mod models;

use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("Connecting to database...");
    let pool = db::connect(&config)
        .await
        .expect("Failed to create pool");

    // Run migrations
    log::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    log::info!(
        "Starting server at http://{}:{}",
        config.bind_address,
        config.port
    );

    let bind = (config.bind_address.clone(), config.port);
    let pool_data = web::Data::new(pool);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Malformed or incomplete JSON bodies surface as a 400 with the
        // deserializer's message.
        let json_config = web::JsonConfig::default().error_handler(|err, _| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
            )
            .into()
        });

        App::new()
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .app_data(json_config)
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind)?
    .run()
    .await
}

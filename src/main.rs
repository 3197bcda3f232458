use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use typetest_backend::config::cors::configure_cors;
use typetest_backend::config::database::connect_to_database;
use typetest_backend::config::routes::configure_routes;
use typetest_backend::config::settings::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let address = config.server_address();
    let database = web::Data::new(connect_to_database(&config).await);
    let config = web::Data::new(config);

    info!("Server is running on {}", address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors())
            .app_data(database.clone())
            .app_data(config.clone())
            .configure(configure_routes)
    })
    .bind(address)?
    .run()
    .await
}

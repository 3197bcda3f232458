use actix_web::{web, HttpResponse};

use crate::config::settings::AppConfig;
use crate::models::api_response::message_response;
use crate::repositories::Database;
use crate::services::diagnostics_service::build_report;

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(message_response("Typing Test Backend Running"))
}

pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(message_response("Hello from the backend API!"))
}

pub async fn test_database(
    database: web::Data<Database>,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    HttpResponse::Ok().json(build_report(&database, &config).await)
}

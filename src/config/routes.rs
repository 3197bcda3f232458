use crate::controllers::result_controller::{list_results, save_result};
use crate::controllers::status_controller::{hello, root, test_database};
use crate::error::{AppError, ValidationError};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/", web::get().to(root))
        .route("/api/hello", web::get().to(hello))
        .route("/test", web::get().to(test_database))
        .service(
            web::resource("/api/results")
                .route(web::post().to(save_result))
                .route(web::get().to(list_results)),
        );
}

// Extractor failures are client input problems and share the validation error body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(ValidationError::new("body", err.to_string())).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::from(ValidationError::new("query", err.to_string())).into()
    })
}

use actix_cors::Cors;

/// Open policy: any origin, method and header, with credentials.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600) // Cache preflight responses for 1 hour
}

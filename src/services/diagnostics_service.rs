use crate::config::settings::AppConfig;
use crate::constants::{DIAGNOSTIC_ERROR_CHARS, MAX_LISTED_COLLECTIONS};
use crate::models::diagnostics::{
    degraded_status, env_flag, DiagnosticReport, BACKEND_RUNNING, CONNECTED,
    DATABASE_NOT_AVAILABLE, DATABASE_WORKING, NOT_CONNECTED,
};
use crate::repositories::Database;
use crate::utils::helpers::truncate_chars;

/// Inspect the database handle. Storage failures become status text, never errors.
pub async fn build_report(database: &Database, config: &AppConfig) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: BACKEND_RUNNING.to_string(),
        database: DATABASE_NOT_AVAILABLE.to_string(),
        database_url: env_flag(config.database_url.is_some()),
        database_name: env_flag(config.database_name.is_some()),
        connection_status: NOT_CONNECTED.to_string(),
        collections: Vec::new(),
    };

    if !database.is_configured() {
        return report;
    }

    report.connection_status = CONNECTED.to_string();
    match database.list_collection_names(MAX_LISTED_COLLECTIONS).await {
        Ok(collections) => {
            report.collections = collections;
            report.database = DATABASE_WORKING.to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "collection listing failed");
            report.database =
                degraded_status(&truncate_chars(&e.to_string(), DIAGNOSTIC_ERROR_CHARS));
        }
    }

    report
}

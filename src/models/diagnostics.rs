use serde::{Deserialize, Serialize};

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const VAR_SET: &str = "✅ Set";
pub const VAR_NOT_SET: &str = "❌ Not Set";

/// Body of the `/test` diagnostic route.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn env_flag(is_set: bool) -> String {
    if is_set { VAR_SET } else { VAR_NOT_SET }.to_string()
}

pub fn degraded_status(detail: &str) -> String {
    format!("⚠️  Connected but Error: {}", detail)
}

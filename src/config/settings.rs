use std::{fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::constants::DEFAULT_PORT;

/// Process configuration, read once from the environment at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            database_url: var("DATABASE_URL"),
            database_name: var("DATABASE_NAME"),
            port: try_load(var("PORT"), "PORT", DEFAULT_PORT),
        }
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn try_load<T: FromStr + Display>(value: Option<String>, key: &str, default: T) -> T
where
    T::Err: Display,
{
    match value {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
    }
}

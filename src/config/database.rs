use mongodb::{bson::doc, Client};
use tracing::{error, info, warn};

use crate::config::settings::AppConfig;
use crate::constants::{DEFAULT_DB_NAME, MEMORY_URL_SCHEME};
use crate::repositories::{Database, DocumentStore, MemoryStore, MongoStore};

/// Open the database described by `config`.
///
/// Never fails: a missing URL or an unreachable server yields [`Database::Disabled`].
pub async fn connect_to_database(config: &AppConfig) -> Database {
    let Some(url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set, storage disabled");
        return Database::Disabled;
    };

    if url.starts_with(MEMORY_URL_SCHEME) {
        let name = config.database_name.as_deref().unwrap_or(DEFAULT_DB_NAME);
        info!(database = name, "using in-memory document store");
        return Database::connected(MemoryStore::new(name));
    }

    match connect_to_mongodb(url, config.database_name.as_deref()).await {
        Ok(store) => {
            info!(database = store.name(), "connected to MongoDB");
            Database::connected(store)
        }
        Err(e) => {
            error!(error = %e, "failed to connect to MongoDB, storage disabled");
            Database::Disabled
        }
    }
}

async fn connect_to_mongodb(
    uri: &str,
    name: Option<&str>,
) -> Result<MongoStore, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;

    let database = match name {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DB_NAME)),
    };

    database.run_command(doc! { "ping": 1 }).await?;

    Ok(MongoStore::new(database))
}

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::StorageError;

/// A schema-flexible store of documents grouped into named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database.
    fn name(&self) -> &str;

    /// Append `document` to `collection` and return the id assigned to it.
    async fn insert(&self, collection: &str, document: Document) -> Result<String, StorageError>;

    /// Up to `limit` documents of `collection` whose top-level fields equal those of `filter`,
    /// in natural order. An empty filter matches everything.
    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError>;
}

/// The process-wide database handle.
///
/// Built once at startup and shared read-only by every request. `Disabled` stands in for a
/// missing or unreachable database: each operation then fails with
/// [`StorageError::NotConfigured`] instead of taking the process down.
#[derive(Clone)]
pub enum Database {
    Disabled,
    Connected(Arc<dyn DocumentStore>),
}

impl Database {
    pub fn connected(store: impl DocumentStore + 'static) -> Self {
        Database::Connected(Arc::new(store))
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Database::Connected(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Database::Disabled => None,
            Database::Connected(store) => Some(store.name()),
        }
    }

    fn store(&self) -> Result<&dyn DocumentStore, StorageError> {
        match self {
            Database::Disabled => Err(StorageError::NotConfigured),
            Database::Connected(store) => Ok(store.as_ref()),
        }
    }

    pub async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StorageError> {
        self.store()?.insert(collection, document).await
    }

    pub async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError> {
        let store = self.store()?;
        // MongoDB reads a zero limit as "unbounded".
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut documents = store.query(collection, filter, limit).await?;
        documents.truncate(limit);
        Ok(documents)
    }

    /// At most `max` collection names, for health checks.
    pub async fn list_collection_names(&self, max: usize) -> Result<Vec<String>, StorageError> {
        let mut names = self.store()?.list_collection_names().await?;
        names.truncate(max);
        Ok(names)
    }
}

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document};

use crate::error::StorageError;
use crate::repositories::document_store::DocumentStore;

pub struct MongoStore {
    database: mongodb::Database,
}

impl MongoStore {
    pub fn new(database: mongodb::Database) -> Self {
        Self { database }
    }

    fn get_collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.database.name()
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<String, StorageError> {
        let result = self.get_collection(collection).insert_one(document).await?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(id) => id,
            other => other.to_string(),
        })
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError> {
        let mut cursor = self
            .get_collection(collection)
            .find(filter)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;

        let mut documents = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            documents.push(doc);
        }

        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.database.list_collection_names().await?)
    }
}

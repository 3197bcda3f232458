use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::repositories::document_store::DocumentStore;

/// In-process document store with MongoDB-style ids. Selected with `DATABASE_URL=memory://`.
pub struct MemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, StorageError> {
        let id = ObjectId::new();
        document.insert("_id", id);

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches_filter(document, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[actix_web::test]
    async fn insert_assigns_unique_object_ids() {
        let store = MemoryStore::new("test");
        let first = store.insert("typingresult", doc! { "wpm": 10.0 }).await.unwrap();
        let second = store.insert("typingresult", doc! { "wpm": 20.0 }).await.unwrap();

        assert_ne!(first, second);
        assert!(ObjectId::parse_str(&first).is_ok());
        assert_eq!(store.count("typingresult").await, 2);
    }

    #[actix_web::test]
    async fn query_filters_and_keeps_insertion_order() {
        let store = MemoryStore::new("test");
        store
            .insert("typingresult", doc! { "wpm": 1.0, "user_id": "a" })
            .await
            .unwrap();
        store
            .insert("typingresult", doc! { "wpm": 2.0, "user_id": "b" })
            .await
            .unwrap();
        store
            .insert("typingresult", doc! { "wpm": 3.0, "user_id": "a" })
            .await
            .unwrap();

        let all = store.query("typingresult", doc! {}, 10).await.unwrap();
        let wpms: Vec<f64> = all.iter().map(|d| d.get_f64("wpm").unwrap()).collect();
        assert_eq!(wpms, vec![1.0, 2.0, 3.0]);

        let only_a = store
            .query("typingresult", doc! { "user_id": "a" }, 1)
            .await
            .unwrap();
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].get_f64("wpm").unwrap(), 1.0);
    }

    #[actix_web::test]
    async fn unknown_collection_is_empty() {
        let store = MemoryStore::new("test");
        assert!(store.query("missing", doc! {}, 5).await.unwrap().is_empty());
        assert!(store.list_collection_names().await.unwrap().is_empty());
    }
}

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, Document};

use crate::constants::RESULTS_COLLECTION;
use crate::error::StorageError;
use crate::models::typing_result::{ResultDocument, ResultRecord, TypingResult};
use crate::repositories::Database;

/// Persist `result` stamped with `now` and return its id.
pub async fn save_result(
    database: &Database,
    result: &TypingResult,
    now: DateTime<Utc>,
) -> Result<String, StorageError> {
    database
        .insert(RESULTS_COLLECTION, result.to_document(now))
        .await
}

/// Up to `limit` stored results, optionally for one user, oldest first.
pub async fn list_results(
    database: &Database,
    limit: usize,
    user_id: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Vec<ResultRecord>, StorageError> {
    let documents = database
        .query(RESULTS_COLLECTION, results_filter(user_id), limit)
        .await?;

    let mut records: Vec<ResultRecord> = documents
        .iter()
        .map(|doc| ResultDocument::from_document(doc).into_record(now))
        .collect();
    records.sort_by_key(|record| record.created_at);

    Ok(records)
}

fn results_filter(user_id: Option<&str>) -> Document {
    match user_id {
        Some(user_id) => doc! { "user_id": user_id },
        None => doc! {},
    }
}

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::constants::DEFAULT_RESULTS_LIMIT;
use crate::error::AppError;
use crate::models::typing_result::{SaveResultResponse, TypingResult};
use crate::repositories::Database;
use crate::services::result_service;

#[derive(Deserialize)]
pub struct ListResultsQuery {
    pub limit: Option<u64>,
    pub user_id: Option<String>,
}

impl ListResultsQuery {
    pub fn limit(&self) -> usize {
        let limit = self.limit.unwrap_or(DEFAULT_RESULTS_LIMIT);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }

    /// A blank `user_id` means no filter.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .filter(|user_id| !user_id.trim().is_empty())
    }
}

pub async fn save_result(
    database: web::Data<Database>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let result = TypingResult::from_json(&body)?;

    let id = result_service::save_result(&database, &result, Utc::now()).await?;
    info!(%id, wpm = result.wpm, "typing result saved");

    Ok(HttpResponse::Ok().json(SaveResultResponse::ok(id)))
}

pub async fn list_results(
    database: web::Data<Database>,
    query: web::Query<ListResultsQuery>,
) -> Result<HttpResponse, AppError> {
    let records =
        result_service::list_results(&database, query.limit(), query.user_id(), Utc::now())
            .await?;

    Ok(HttpResponse::Ok().json(records))
}

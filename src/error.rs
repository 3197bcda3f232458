use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::constants::ERROR_DETAIL_CHARS;
use crate::models::api_response::{error_response, error_response_with_data};
use crate::utils::helpers::truncate_chars;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database not configured")]
    NotConfigured,

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("{0}")]
    Unexpected(String),
}

/// A client payload field that could not be coerced to its declared type.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(err) => HttpResponse::build(self.status_code())
                .json(error_response_with_data(&err.to_string(), err)),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "storage operation failed");
                HttpResponse::build(self.status_code()).json(error_response(&truncate_chars(
                    &err.to_string(),
                    ERROR_DETAIL_CHARS,
                )))
            }
        }
    }
}

use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Failures of review operations. Statuses are assigned only at the HTTP boundary.
#[derive(Debug, Error, PartialEq)]
pub enum ReviewError {
    /// Out-of-range or missing field; raised before any storage access
    #[error("Validation error: {0}")]
    Validation(String),
    /// Path id is not a valid storage identifier; raised before any storage access
    #[error("Invalid review id: {0}")]
    InvalidIdentifier(String),
    #[error("Review not found")]
    NotFound,
    /// Backend failure; the detail stays in the logs
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReviewError {
    fn public_message(&self) -> String {
        match self {
            Self::Storage(_) => "Storage failure".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(JsonResponse::<()>::failure(&self.public_message()))
    }
}

impl From<serde_valid::validation::Errors> for ReviewError {
    fn from(errors: serde_valid::validation::Errors) -> Self {
        Self::Validation(errors.to_string())
    }
}

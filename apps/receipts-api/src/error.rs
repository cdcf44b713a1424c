//! Error types for the Receipts API.
//!
//! ## Status Mapping
//! ```text
//! ValidationError / bad JSON  → ApiError::InvalidReceipt → 400
//! StoreError::NotFound        → ApiError::NotFound       → 404
//! undecodable path id         → ApiError::NotFound       → 404
//! any other StoreError        → ApiError::Internal       → 500
//! ```
//!
//! Clients always get a fixed `detail` string; the underlying reason is
//! logged, not returned.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipts_core::ValidationError;
use receipts_store::StoreError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

pub const INVALID_RECEIPT_DETAIL: &str = "The receipt is invalid.";
pub const NOT_FOUND_DETAIL: &str = "No receipt found for that ID.";
pub const INTERNAL_DETAIL: &str = "Internal server error.";

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            ApiError::InvalidReceipt(_) => INVALID_RECEIPT_DETAIL,
            ApiError::NotFound(_) => NOT_FOUND_DETAIL,
            ApiError::Internal(_) => INTERNAL_DETAIL,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidReceipt(reason) => warn!(%reason, "Rejected receipt"),
            ApiError::Internal(reason) => error!(%reason, "Request failed"),
            ApiError::NotFound(_) => {}
        }

        let body = ErrorBody {
            detail: self.detail().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidReceipt(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidReceipt(rejection.body_text())
    }
}

// An id that does not even decode cannot have been issued.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

//! Typed error handling for silverpress
//!
//! The error taxonomy is deliberately small:
//!
//! - [`SilverpressError::Validation`]: per-field, user-correctable, never persisted
//! - [`SilverpressError::NotFound`]: lookup miss, rendered as an empty state
//! - [`SilverpressError::Storage`]: persistence failure, fatal to the request
//! - [`SilverpressError::Internal`]: should not happen in normal operation
//!
//! Notification delivery failures are intentionally absent from this enum:
//! they are represented by [`DeliveryError`](crate::notify::DeliveryError),
//! which the order service logs and discards. A failed confirmation email can
//! never fail the operation that triggered it.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::core::validation::ValidationErrors;

/// The main error type for the silverpress services
#[derive(Debug)]
pub enum SilverpressError {
    /// Input validation failed; carries the per-field error map
    Validation(ValidationErrors),

    /// A lookup by id found nothing
    NotFound { kind: &'static str, id: Uuid },

    /// The persistent store failed; no partial state is left visible
    Storage(anyhow::Error),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl SilverpressError {
    pub fn not_found(kind: &'static str, id: Uuid) -> Self {
        SilverpressError::NotFound { kind, id }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SilverpressError::Validation(_) => StatusCode::BAD_REQUEST,
            SilverpressError::NotFound { .. } => StatusCode::NOT_FOUND,
            SilverpressError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SilverpressError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SilverpressError::Validation(_) => "VALIDATION_ERROR",
            SilverpressError::NotFound { .. } => "NOT_FOUND",
            SilverpressError::Storage(_) => "STORAGE_ERROR",
            SilverpressError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            SilverpressError::Validation(errors) => serde_json::to_value(errors.messages()).ok(),
            _ => None,
        };
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

impl fmt::Display for SilverpressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SilverpressError::Validation(errors) => {
                write!(f, "Validation failed for {} field(s)", errors.len())
            }
            SilverpressError::NotFound { kind, id } => write!(f, "{} {} not found", kind, id),
            SilverpressError::Storage(e) => write!(f, "Storage error: {}", e),
            SilverpressError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for SilverpressError {}

impl From<ValidationErrors> for SilverpressError {
    fn from(errors: ValidationErrors) -> Self {
        SilverpressError::Validation(errors)
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field name -> message for validation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for SilverpressError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}

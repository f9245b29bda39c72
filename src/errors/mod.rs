//! Error handling module for the hub site.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::hub::ConfigFailure;
use crate::store::ContentError;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const CONFIG_MISSING: &str = "CONFIG_MISSING";
    pub const CONFIG_MALFORMED: &str = "CONFIG_MALFORMED";
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
    pub const COLLECTION_UNAVAILABLE: &str = "COLLECTION_UNAVAILABLE";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Hub configuration could not be loaded; the whole site is unavailable
    Config(ConfigFailure),
    /// A single content collection failed to load
    Collection(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Collection(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(failure) => failure.kind.error_code(),
            AppError::Collection(_) => codes::COLLECTION_UNAVAILABLE,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Config(failure) => failure.summary(),
            AppError::Collection(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<ConfigFailure> for AppError {
    fn from(failure: ConfigFailure) -> Self {
        AppError::Config(failure)
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        tracing::error!("Collection error: {}", err);
        AppError::Collection(err.collection().failure_message().to_string())
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let details = match error {
            AppError::Config(failure) => {
                serde_json::to_value(crate::hub::RemediationReport::from_failure(failure)).ok()
            }
            _ => None,
        };

        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
                details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}

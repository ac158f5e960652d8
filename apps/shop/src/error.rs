//! # API Error Type
//!
//! Unified error type for the command boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bloom                                  │
//! │                                                                         │
//! │  Page script                 Rust                                       │
//! │  ───────────                 ────                                       │
//! │                                                                         │
//! │  button click (data-action, data-id)                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::from_action ── unknown action / bad id ──► VALIDATION_ERROR   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Session::dispatch                                                      │
//! │    cart commands ──────── never fail (unknown ids are ignored)          │
//! │    ViewDetails ────────── unknown id ──────────────► NOT_FOUND          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CommandOutcome (JSON) ─────────────────────────────► renderer          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bloom_core::{CoreError, ValidationError};
use serde::Serialize;
use ts_rs::TS;

use crate::state::ConfigError;

/// Error handed back to the page script.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Product id does not resolve
    NotFound,

    /// Raw input could not be turned into a command
    ValidationError,

    /// Configuration could not be loaded or is inconsistent
    ConfigError,

    /// Unexpected failure (e.g. response serialization)
    Internal,
}

/// Convenience type alias for command results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::EmptyCatalog => {
                ApiError::new(ErrorCode::ConfigError, "Catalog has no products")
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response serialization failed: {}", err);
        ApiError::internal("Failed to serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

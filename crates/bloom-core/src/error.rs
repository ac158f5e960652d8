//! # Error Types
//!
//! Domain-specific error types for bloom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bloom-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Catalog / input validation failures            │
//! │                                                                         │
//! │  bloom-shop errors (app crate)                                         │
//! │  ├── ConfigError      - Config file / env failures                     │
//! │  └── ApiError         - What the page script sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and query operations never produce these: unknown ids and empty
//! results are normal outcomes there. Errors only come from building a
//! catalog, parsing raw input, and explicit lookups.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not resolve in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A catalog must hold at least one product.
    #[error("Catalog has no products")]
    EmptyCatalog,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(99));
        assert_eq!(err.to_string(), "Product not found: 99");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "id '3' already exists");

        let err = ValidationError::NotAllowed {
            field: "sort".to_string(),
            allowed: vec!["featured".to_string()],
        };
        assert_eq!(err.to_string(), "sort must be one of: [\"featured\"]");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

//! # Error Types
//!
//! Domain-specific error types for grocery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocery-core errors (this file)                                       │
//! │  ├── CoreError        - Pricing failures (abort the whole order)       │
//! │  └── ValidationError  - Malformed input lines or catalog entries       │
//! │                                                                         │
//! │  grocery-cli errors (app crate)                                        │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (binary) → stderr          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field)
//! 3. Errors are enum variants, never String
//! 4. No partial success: any error means no receipt at all
//! 5. Arithmetic overflow is an error, never a panic or a clamped value

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// Every variant aborts pricing of the entire order. None of them is
/// transient, so nothing in the engine retries.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The order has no lines at all.
    ///
    /// ## When This Occurs
    /// - Client submitted `[]`
    /// - Client submitted an order object with an empty item list
    #[error("No items found in the order, it is not valid")]
    EmptyOrder,

    /// A line names a product that the catalog does not know.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A line is well-formed but cannot be sold.
    ///
    /// ## When This Occurs
    /// - Bread older than six days
    ///
    /// ## User Workflow
    /// ```text
    /// Order: 2 x bread (7 days old)
    ///      │
    ///      ▼
    /// Bread discount: age 7 > 6
    ///      │
    ///      ▼
    /// InvalidOrderLine { name: "bread", reason: "..." }
    ///      │
    ///      ▼
    /// No receipt is produced
    /// ```
    #[error("Invalid order line '{name}': {reason}")]
    InvalidOrderLine { name: String, reason: String },

    /// An aggregate or amount is too large to be computed exactly.
    ///
    /// ## When This Occurs
    /// - Split beer lines whose quantities sum past `u32::MAX`
    /// - Weights or prices whose product exceeds the decimal range
    #[error("Amount out of range: {0}")]
    Overflow(String),

    /// A catalog document could not be parsed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any pricing runs, both for submitted order lines and for
/// products added to a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Duplicate value (e.g., two catalog products with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("cheese".to_string());
        assert_eq!(err.to_string(), "Product not found: cheese");

        let err = CoreError::InvalidOrderLine {
            name: "bread".to_string(),
            reason: "bread older than six days cannot be ordered".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid order line 'bread': bread older than six days cannot be ordered"
        );
    }

    #[test]
    fn test_overflow_message() {
        let err = CoreError::Overflow("total vegetable weight".to_string());
        assert_eq!(err.to_string(), "Amount out of range: total vegetable weight");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "weight".to_string(),
        };
        assert_eq!(err.to_string(), "weight must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Duplicate {
            field: "name".to_string(),
            value: "bread".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

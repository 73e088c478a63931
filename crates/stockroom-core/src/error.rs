//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  stockroom-core errors (this file)                              │
//! │  ├── CoreError        - Invariant failures (stock underflow)    │
//! │  └── ValidationError  - Input constraint failures               │
//! │                                                                 │
//! │  stockroom-db errors (separate crate)                           │
//! │  └── DbError          - Not-found, raw-SQL gate, sqlx mapping   │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → DbError → caller           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, amounts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain invariant failures.
///
/// These represent rule violations detected after input validation has
/// already passed, during quantity arithmetic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An adjustment would drive the stored amount below zero.
    ///
    /// ## When This Occurs
    /// - Selling more than is on hand
    ///
    /// The adjustment is rejected outright, never clamped to zero; the
    /// stored amount is left untouched.
    #[error("insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    /// An adjustment overflowed i64.
    ///
    /// Practically unreachable with real inventories, but checked
    /// arithmetic means we must name the case.
    #[error("amount overflow: {current} + {delta} does not fit in i64")]
    AmountOverflow { current: i64, delta: i64 },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input constraint failures.
///
/// These occur when caller-supplied field values do not meet the schema
/// constraints. They are raised before any statement is executed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// A value that must be non-negative is negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// A price that must be non-negative is negative.
    #[error("price must not be negative (got {value})")]
    NegativePrice { value: f64 },

    /// A price is NaN or infinite.
    #[error("price must be a finite number")]
    NonFinitePrice,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            available: 2,
            requested: 10,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock: available 2, requested 10"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Empty {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name must not be empty");

        let err = ValidationError::Negative {
            field: "amount".to_string(),
            value: -3,
        };
        assert_eq!(err.to_string(), "amount must not be negative (got -3)");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Empty {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

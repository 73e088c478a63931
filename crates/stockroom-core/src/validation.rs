//! # Validation Module
//!
//! Field validation for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                          │
//! │                                                                 │
//! │  Layer 1: Presentation (CLI prompt / grid cell edit)            │
//! │  ├── Parse failures rejected inline, re-prompt                  │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: THIS MODULE, called by the repository write paths     │
//! │  ├── Empty name, negative amount, negative price                │
//! │  └── Typed error BEFORE any SQL statement runs                  │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 3: Database (SQLite CHECK constraints)                   │
//! │  └── Backstop only; callers should never reach it               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_name;
///
/// assert!(validate_name("Widget").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock amount.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is a valid stock level
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::Negative {
            field: "amount".to_string(),
            value: amount,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - `None` is allowed (price not yet decided)
/// - When present, must be finite and non-negative; zero is allowed
///   (free items)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(Some(9.99)).is_ok());
/// assert!(validate_price(Some(0.0)).is_ok());
/// assert!(validate_price(None).is_ok());
/// assert!(validate_price(Some(-1.0)).is_err());
/// assert!(validate_price(Some(f64::NAN)).is_err());
/// ```
pub fn validate_price(price: Option<f64>) -> ValidationResult<()> {
    let Some(value) = price else {
        return Ok(());
    };

    if !value.is_finite() {
        return Err(ValidationError::NonFinitePrice);
    }

    if value < 0.0 {
        return Err(ValidationError::NegativePrice { value });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Widget").is_ok());
        assert!(validate_name("  padded  ").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0).is_ok());
        assert!(validate_amount(1).is_ok());
        assert!(validate_amount(i64::MAX).is_ok());

        assert!(validate_amount(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(None).is_ok());
        assert!(validate_price(Some(0.0)).is_ok());
        assert!(validate_price(Some(9.99)).is_ok());

        assert!(validate_price(Some(-0.01)).is_err());
        assert!(validate_price(Some(f64::NAN)).is_err());
        assert!(validate_price(Some(f64::INFINITY)).is_err());
    }
}

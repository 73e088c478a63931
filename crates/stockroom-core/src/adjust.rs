//! # Quantity Adjustment
//!
//! The buy/sell arithmetic and its single invariant: the stored amount
//! must never go negative.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  sell 10 of item 1 (current amount: 2)                          │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  apply_adjustment(2, -10) ← THIS MODULE                         │
//! │       │                                                         │
//! │       ├── result < 0? → Err(InsufficientStock), nothing written │
//! │       │                                                         │
//! │       └── OK → repository writes the new amount and commits     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};

/// Computes `current + delta` under the non-negativity invariant.
///
/// ## Contract
/// - Returns the new amount on success.
/// - Fails with [`CoreError::InsufficientStock`] if the result would be
///   negative. The failure never clamps: callers must not write anything
///   when this errors.
/// - Positive delta = buy, negative delta = sell.
///
/// ## Example
/// ```rust
/// use stockroom_core::apply_adjustment;
///
/// assert_eq!(apply_adjustment(5, -3).unwrap(), 2);
/// assert!(apply_adjustment(2, -10).is_err());
/// ```
pub fn apply_adjustment(current: i64, delta: i64) -> CoreResult<i64> {
    let updated = current
        .checked_add(delta)
        .ok_or(CoreError::AmountOverflow { current, delta })?;

    if updated < 0 {
        return Err(CoreError::InsufficientStock {
            available: current,
            requested: -delta,
        });
    }

    Ok(updated)
}

// =============================================================================
// Unit Tests
// =============================================================================

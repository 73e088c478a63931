//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the heart of Stockroom. It contains the domain types and
//! every invariant check as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Stockroom Architecture                      │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  apps/cli (text menu)                     │  │
//! │  │    list, new, delete, buy, sell, price, rename, ...       │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              ★ stockroom-core (THIS CRATE) ★              │  │
//! │  │                                                           │  │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────────────┐    │  │
//! │  │   │   types   │  │ validation │  │      adjust       │    │  │
//! │  │   │   Item    │  │   checks   │  │  buy/sell math    │    │  │
//! │  │   └───────────┘  └────────────┘  └───────────────────┘    │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                   │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │                stockroom-db (SQLite layer)                │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation (name, price, amount)
//! - [`adjust`] - Quantity arithmetic with the non-negativity invariant
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no side effects
//! 2. **Explicit Errors**: all errors are typed, never strings or panics
//! 3. **Validate Before Write**: the database CHECK constraints are a
//!    backstop; every rule is enforced here first so callers get a typed
//!    error before any statement runs

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adjust;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use adjust::apply_adjustment;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::Item;

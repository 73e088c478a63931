//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for the Stockroom inventory
//! manager. It uses SQLite for local storage with sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Data Flow                        │
//! │                                                                 │
//! │  Menu command (new / buy / sell / delete ...)                   │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 stockroom-db (THIS CRATE)                 │  │
//! │  │                                                           │  │
//! │  │  ┌─────────────┐  ┌────────────────┐  ┌───────────────┐   │  │
//! │  │  │  Database   │  │  Repository    │  │  Migrations   │   │  │
//! │  │  │  (pool.rs)  │◄─│ (inventory.rs) │  │  (embedded)   │   │  │
//! │  │  └─────────────┘  └────────────────┘  └───────────────┘   │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SQLite file: ~/.local/share/stockroom/stockroom.db             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The inventory repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("stockroom.db")).await?;
//! let id = db.inventory().create("Widget", Some(9.99), 5).await?;
//! let remaining = db.inventory().sell(id, 3).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::inventory::InventoryRepository;

//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                            │
//! │                                                                 │
//! │  SQLite Error (sqlx::Error)                                     │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  DbError (this module) ← adds context and categorization        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Menu loop catches, prints, re-prompts                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use stockroom_core::{CoreError, ValidationError};

/// Database operation errors.
///
/// These wrap sqlx errors and carry the pre-write validation failures
/// raised by the repository, so callers get one error type per call.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - A field getter runs against an id with no row
    /// - An UPDATE affects zero rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// Caller-supplied field value failed validation.
    ///
    /// Raised before any statement executes: empty name, negative
    /// amount, negative price.
    #[error(transparent)]
    Constraint(#[from] ValidationError),

    /// A domain invariant failed.
    ///
    /// Raised by `adjust_amount` when a sell would drive the stored
    /// amount negative; nothing is written in that case.
    #[error(transparent)]
    Invariant(#[from] CoreError),

    /// Raw SQL was requested without the opt-in flag.
    ///
    /// `raw_query` executes arbitrary caller-supplied statement text.
    /// It is refused unless the database was opened with
    /// `DbConfig::allow_raw_sql(true)`.
    #[error("raw SQL execution is disabled; open the database with allow_raw_sql to enable it")]
    RawSqlDisabled,

    /// A schema CHECK constraint fired.
    ///
    /// ## When This Occurs
    /// Only if a write slipped past pre-write validation; the schema is
    /// the backstop, not the primary check.
    #[error("check constraint failed: {message}")]
    CheckViolation { message: String },

    /// Database connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound (id unknown here)
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Item".to_string(),
                id: -1,
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports CHECK failures as
                // "CHECK constraint failed: <expr>"
                if msg.contains("CHECK constraint failed") {
                    DbError::CheckViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

//! # Inventory Repository
//!
//! Database operations for the `inventory` table.
//!
//! ## Key Operations
//! - CRUD over items (create, field getters/setters, delete)
//! - Quantity adjustment (buy/sell) with the non-negativity invariant
//! - Gated raw SQL execution
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Every write goes through                        │
//! │                                                                 │
//! │  validate (stockroom-core)  ← typed error BEFORE any SQL        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  parameterized statement    ← values are always bound           │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  immediate commit           ← no state survives a call boundary │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use stockroom_core::{apply_adjustment, validation, Item};

/// Repository for inventory database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.inventory();
///
/// let id = repo.create("Widget", Some(9.99), 5).await?;
/// let remaining = repo.sell(id, 3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
    raw_sql_enabled: bool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool, raw_sql_enabled: bool) -> Self {
        InventoryRepository {
            pool,
            raw_sql_enabled,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Counts items. Used by presentation layers to size their grid.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM inventory")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns all ids in ascending order; empty when the store is empty.
    pub async fn list_ids(&self) -> DbResult<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM inventory ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    /// Returns `(id, name)` pairs ordered by id.
    ///
    /// Used for delete-selection prompts, where showing the full row
    /// would be noise.
    pub async fn list_id_name_pairs(&self) -> DbResult<Vec<(i64, String)>> {
        let pairs: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM inventory ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(pairs)
    }

    /// Returns all items ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items: Vec<Item> =
            sqlx::query_as("SELECT id, name, amount, price FROM inventory ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(items)
    }

    /// Gets a full item by id.
    ///
    /// ## Returns
    /// * `Ok(Item)` - the row
    /// * `Err(DbError::NotFound)` - id does not resolve to a row
    pub async fn get(&self, id: i64) -> DbResult<Item> {
        let item: Option<Item> =
            sqlx::query_as("SELECT id, name, amount, price FROM inventory WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        item.ok_or_else(|| DbError::not_found("Item", id))
    }

    /// Gets an item's name.
    ///
    /// A missing id is a hard error, never a silent None: callers that
    /// hold an id expect it to resolve.
    pub async fn get_name(&self, id: i64) -> DbResult<String> {
        let name: Option<String> = sqlx::query_scalar("SELECT name FROM inventory WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        name.ok_or_else(|| DbError::not_found("Item", id))
    }

    /// Gets an item's price. `None` means the price is not set, which is
    /// distinct from the id not existing (that is `NotFound`).
    pub async fn get_price(&self, id: i64) -> DbResult<Option<f64>> {
        let row: Option<(Option<f64>,)> =
            sqlx::query_as("SELECT price FROM inventory WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((price,)) => Ok(price),
            None => Err(DbError::not_found("Item", id)),
        }
    }

    /// Gets an item's stock amount.
    pub async fn get_amount(&self, id: i64) -> DbResult<i64> {
        let amount: Option<i64> = sqlx::query_scalar("SELECT amount FROM inventory WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        amount.ok_or_else(|| DbError::not_found("Item", id))
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Inserts a new item and returns its id.
    ///
    /// ## Contract
    /// - `name` must be non-empty
    /// - `amount` must be non-negative
    /// - `price` must be non-negative when present
    ///
    /// Violations fail with a validation error before anything is
    /// written; `count()` is unchanged on failure.
    pub async fn create(&self, name: &str, price: Option<f64>, amount: i64) -> DbResult<i64> {
        validation::validate_name(name).map_err(DbError::Constraint)?;
        validation::validate_price(price).map_err(DbError::Constraint)?;
        validation::validate_amount(amount).map_err(DbError::Constraint)?;

        info!(name = %name, ?price, amount, "Creating new item");

        let result = sqlx::query("INSERT INTO inventory (name, price, amount) VALUES (?1, ?2, ?3)")
            .bind(name)
            .bind(price)
            .bind(amount)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Item created");

        Ok(id)
    }

    /// Renames an item.
    ///
    /// Same name constraint as `create`. A zero-row update means the id
    /// does not exist and fails with `NotFound`.
    pub async fn rename(&self, id: i64, name: &str) -> DbResult<()> {
        validation::validate_name(name).map_err(DbError::Constraint)?;

        debug!(id, name = %name, "Renaming item");

        let result = sqlx::query("UPDATE inventory SET name = ?2 WHERE id = ?1")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Sets an item's price. `None` clears it.
    pub async fn set_price(&self, id: i64, price: Option<f64>) -> DbResult<()> {
        validation::validate_price(price).map_err(DbError::Constraint)?;

        debug!(id, ?price, "Setting price");

        let result = sqlx::query("UPDATE inventory SET price = ?2 WHERE id = ?1")
            .bind(id)
            .bind(price)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Sets an item's stock amount directly.
    ///
    /// For corrections (stocktake); day-to-day movement should go
    /// through `buy`/`sell` so the invariant check sees the delta.
    pub async fn set_amount(&self, id: i64, amount: i64) -> DbResult<()> {
        validation::validate_amount(amount).map_err(DbError::Constraint)?;

        debug!(id, amount, "Setting amount");

        let result = sqlx::query("UPDATE inventory SET amount = ?2 WHERE id = ?1")
            .bind(id)
            .bind(amount)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Updates name and price in one statement.
    pub async fn update_item(&self, id: i64, name: &str, price: Option<f64>) -> DbResult<()> {
        validation::validate_name(name).map_err(DbError::Constraint)?;
        validation::validate_price(price).map_err(DbError::Constraint)?;

        info!(id, name = %name, ?price, "Updating item");

        let result = sqlx::query("UPDATE inventory SET name = ?2, price = ?3 WHERE id = ?1")
            .bind(id)
            .bind(name)
            .bind(price)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Applies a signed delta to an item's amount and returns the new
    /// amount.
    ///
    /// ## How It Works
    /// 1. Begin a transaction
    /// 2. Read the current amount (`NotFound` if the id is absent)
    /// 3. `apply_adjustment` computes `current + delta`; if the result
    ///    would be negative the call fails and nothing is written
    /// 4. Write the new amount and commit
    ///
    /// The read and the write share one transaction so the checked value
    /// is the written-over value.
    pub async fn adjust_amount(&self, id: i64, delta: i64) -> DbResult<i64> {
        let mut tx = self.pool.begin().await?;

        let current: Option<i64> = sqlx::query_scalar("SELECT amount FROM inventory WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let current = current.ok_or_else(|| DbError::not_found("Item", id))?;

        let updated = apply_adjustment(current, delta).map_err(DbError::Invariant)?;

        sqlx::query("UPDATE inventory SET amount = ?2 WHERE id = ?1")
            .bind(id)
            .bind(updated)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(id, from = current, to = updated, "Adjusted amount");

        Ok(updated)
    }

    /// Increases stock by `n` (restocking). Returns the new amount.
    pub async fn buy(&self, id: i64, n: i64) -> DbResult<i64> {
        self.adjust_amount(id, n).await
    }

    /// Decreases stock by `n` (a sale). Returns the new amount.
    pub async fn sell(&self, id: i64, n: i64) -> DbResult<i64> {
        self.adjust_amount(id, -n).await
    }

    /// Deletes an item.
    ///
    /// Idempotent: deleting an id that is already absent is not an
    /// error, matching SQL bulk-delete semantics. The id is never
    /// reused for later items.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        info!(id, "Deleting item");

        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Delete executed");

        Ok(())
    }

    // =========================================================================
    // Raw SQL (gated)
    // =========================================================================

    /// Executes arbitrary caller-supplied SQL and commits.
    ///
    /// ## ⚠ Unsafe By Construction
    /// The statement text is executed as-is: no parameterization, no
    /// validation, no invariant checks. Refused with
    /// [`DbError::RawSqlDisabled`] unless the database was opened with
    /// `DbConfig::allow_raw_sql(true)`. Every invocation is logged at
    /// WARN.
    ///
    /// ## Returns
    /// The number of affected rows.
    pub async fn raw_query(&self, sql: &str) -> DbResult<u64> {
        if !self.raw_sql_enabled {
            warn!("Raw SQL requested but the opt-in flag is not set");
            return Err(DbError::RawSqlDisabled);
        }

        warn!(sql = %sql, "Executing caller-supplied SQL; this bypasses all validation");

        let result = sqlx::query(sql).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_getters_round_trip() {
        let db = test_db().await;
        let repo = db.inventory();

        let id = repo.create("Widget", Some(9.99), 5).await.unwrap();

        assert_eq!(repo.get_name(id).await.unwrap(), "Widget");
        assert_eq!(repo.get_price(id).await.unwrap(), Some(9.99));
        assert_eq!(repo.get_amount(id).await.unwrap(), 5);

        let item = repo.get(id).await.unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.amount, 5);
        assert_eq!(item.price, Some(9.99));
    }

    #[tokio::test]
    async fn test_create_defaults_and_null_price() {
        let db = test_db().await;
        let repo = db.inventory();

        let id = repo.create("Mystery Box", None, 0).await.unwrap();

        assert_eq!(repo.get_amount(id).await.unwrap(), 0);
        assert_eq!(repo.get_price(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_empty_name_rejected_count_unchanged() {
        let db = test_db().await;
        let repo = db.inventory();

        let err = repo.create("", Some(1.0), 0).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));

        let err = repo.create("   ", Some(1.0), 0).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_negative_values_rejected() {
        let db = test_db().await;
        let repo = db.inventory();

        assert!(matches!(
            repo.create("Widget", Some(-1.0), 0).await.unwrap_err(),
            DbError::Constraint(_)
        ));
        assert!(matches!(
            repo.create("Widget", None, -1).await.unwrap_err(),
            DbError::Constraint(_)
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_ascending_and_never_reused() {
        let db = test_db().await;
        let repo = db.inventory();

        let a = repo.create("A", None, 0).await.unwrap();
        let b = repo.create("B", None, 0).await.unwrap();
        assert!(b > a);

        repo.delete(b).await.unwrap();
        let c = repo.create("C", None, 0).await.unwrap();

        // AUTOINCREMENT: the deleted id is gone for good
        assert!(c > b);
        assert_eq!(repo.list_ids().await.unwrap(), vec![a, c]);
    }

    #[tokio::test]
    async fn test_list_ids_matches_get_name_success_set() {
        let db = test_db().await;
        let repo = db.inventory();

        let a = repo.create("A", None, 0).await.unwrap();
        let b = repo.create("B", None, 0).await.unwrap();
        repo.delete(a).await.unwrap();

        let ids = repo.list_ids().await.unwrap();
        assert_eq!(ids, vec![b]);

        assert!(repo.get_name(a).await.is_err());
        assert!(repo.get_name(b).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_id_name_pairs_ordered() {
        let db = test_db().await;
        let repo = db.inventory();

        let a = repo.create("First", None, 0).await.unwrap();
        let b = repo.create("Second", None, 0).await.unwrap();

        let pairs = repo.list_id_name_pairs().await.unwrap();
        assert_eq!(
            pairs,
            vec![(a, "First".to_string()), (b, "Second".to_string())]
        );
    }

    #[tokio::test]
    async fn test_getters_on_missing_id_fail() {
        let db = test_db().await;
        let repo = db.inventory();

        assert!(matches!(
            repo.get_name(42).await.unwrap_err(),
            DbError::NotFound { id: 42, .. }
        ));
        assert!(matches!(
            repo.get_price(42).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.get_amount(42).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.get(42).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_setters_validate_and_update() {
        let db = test_db().await;
        let repo = db.inventory();

        let id = repo.create("Widget", Some(1.0), 1).await.unwrap();

        repo.rename(id, "Gadget").await.unwrap();
        repo.set_price(id, Some(2.5)).await.unwrap();
        repo.set_amount(id, 7).await.unwrap();

        let item = repo.get(id).await.unwrap();
        assert_eq!(item.name, "Gadget");
        assert_eq!(item.price, Some(2.5));
        assert_eq!(item.amount, 7);

        // Clearing a price is allowed
        repo.set_price(id, None).await.unwrap();
        assert_eq!(repo.get_price(id).await.unwrap(), None);

        // Constraint checks are the same as on create
        assert!(matches!(
            repo.rename(id, "").await.unwrap_err(),
            DbError::Constraint(_)
        ));
        assert!(matches!(
            repo.set_price(id, Some(-5.0)).await.unwrap_err(),
            DbError::Constraint(_)
        ));
        assert!(matches!(
            repo.set_amount(id, -1).await.unwrap_err(),
            DbError::Constraint(_)
        ));
    }

    #[tokio::test]
    async fn test_setters_on_missing_id_fail() {
        let db = test_db().await;
        let repo = db.inventory();

        assert!(matches!(
            repo.rename(42, "Ghost").await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.set_price(42, Some(1.0)).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.set_amount(42, 1).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.update_item(42, "Ghost", None).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_update_item_sets_both_fields() {
        let db = test_db().await;
        let repo = db.inventory();

        let id = repo.create("Widget", Some(1.0), 3).await.unwrap();
        repo.update_item(id, "Deluxe Widget", Some(19.99))
            .await
            .unwrap();

        let item = repo.get(id).await.unwrap();
        assert_eq!(item.name, "Deluxe Widget");
        assert_eq!(item.price, Some(19.99));
        assert_eq!(item.amount, 3); // untouched
    }

    #[tokio::test]
    async fn test_adjust_amount_worked_example() {
        let db = test_db().await;
        let repo = db.inventory();

        let id = repo.create("Widget", Some(9.99), 5).await.unwrap();

        assert_eq!(repo.adjust_amount(id, -3).await.unwrap(), 2);
        assert_eq!(repo.get_amount(id).await.unwrap(), 2);

        // Over-sell fails and the stored amount is unchanged
        let err = repo.adjust_amount(id, -10).await.unwrap_err();
        assert!(matches!(err, DbError::Invariant(_)));
        assert_eq!(repo.get_amount(id).await.unwrap(), 2);

        repo.delete(id).await.unwrap();
        assert!(matches!(
            repo.get_name(id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_buy_and_sell_wrappers() {
        let db = test_db().await;
        let repo = db.inventory();

        let id = repo.create("Widget", None, 0).await.unwrap();

        assert_eq!(repo.buy(id, 10).await.unwrap(), 10);
        assert_eq!(repo.sell(id, 4).await.unwrap(), 6);
        assert_eq!(repo.sell(id, 6).await.unwrap(), 0);

        assert!(repo.sell(id, 1).await.is_err());
        assert_eq!(repo.get_amount(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_adjust_amount_missing_id() {
        let db = test_db().await;
        let repo = db.inventory();

        assert!(matches!(
            repo.adjust_amount(42, 1).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = test_db().await;
        let repo = db.inventory();

        let id = repo.create("Widget", None, 0).await.unwrap();

        repo.delete(id).await.unwrap();
        repo.delete(id).await.unwrap(); // second delete: no error

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.delete(9999).await.unwrap(); // never-existed id: no error
    }

    #[tokio::test]
    async fn test_list_returns_full_rows_in_order() {
        let db = test_db().await;
        let repo = db.inventory();

        let a = repo.create("A", Some(1.0), 1).await.unwrap();
        let b = repo.create("B", None, 2).await.unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, a);
        assert_eq!(items[1].id, b);
        assert_eq!(items[1].price, None);
    }

    #[tokio::test]
    async fn test_raw_query_disabled_by_default() {
        let db = test_db().await;
        let repo = db.inventory();

        let err = repo
            .raw_query("DELETE FROM inventory")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::RawSqlDisabled));
    }

    #[tokio::test]
    async fn test_raw_query_with_opt_in() {
        let db = Database::new(DbConfig::in_memory().allow_raw_sql(true))
            .await
            .unwrap();
        let repo = db.inventory();

        repo.create("A", None, 0).await.unwrap();
        repo.create("B", None, 0).await.unwrap();

        let affected = repo.raw_query("DELETE FROM inventory").await.unwrap();
        assert_eq!(affected, 2);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}

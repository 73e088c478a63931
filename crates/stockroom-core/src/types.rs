//! # Domain Types
//!
//! The one entity Stockroom manages: an inventory row.

use serde::{Deserialize, Serialize};

/// One inventory row.
///
/// ## Field Notes
/// - `id` is assigned by SQLite AUTOINCREMENT, is immutable once created
///   and is never reused after a delete.
/// - `price` is nullable: an item can exist before anyone has decided
///   what it costs. Absent is rendered as `-` by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Unique identifier, ascending, never reused.
    pub id: i64,

    /// Display name. Never empty.
    pub name: String,

    /// Stock on hand. Never negative.
    pub amount: i64,

    /// Unit price, if known. Never negative when present.
    pub price: Option<f64>,
}

impl Item {
    /// Formats the price for display, `-` when unknown.
    pub fn price_display(&self) -> String {
        match self.price {
            Some(p) => format!("{p:.2}"),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        let mut item = Item {
            id: 1,
            name: "Widget".to_string(),
            amount: 5,
            price: Some(9.99),
        };
        assert_eq!(item.price_display(), "9.99");

        item.price = None;
        assert_eq!(item.price_display(), "-");
    }
}

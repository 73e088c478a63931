//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Menu command                                                   │
//! │       │                                                         │
//! │       │  db.inventory().sell(id, 3)                             │
//! │       ▼                                                         │
//! │  InventoryRepository                                            │
//! │  ├── create(&self, name, price, amount)                         │
//! │  ├── get_name / get_price / get_amount                          │
//! │  ├── adjust_amount(&self, id, delta)                            │
//! │  └── delete(&self, id)                                          │
//! │       │                                                         │
//! │       │  SQL statement                                          │
//! │       ▼                                                         │
//! │  SQLite Database                                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One repository, one table: Stockroom's entire persistent state is the
//! `inventory` table.

pub mod inventory;

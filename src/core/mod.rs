//! Core business logic module
//!
//! This module contains the store's in-memory state and its rules:
//! - `keyed_table` - Fixed-size chained hash table
//! - `catalog` - Ordered, duplicate-free movie catalog and search
//! - `item_factory` - Category registry that builds catalog items
//! - `account_registry` - Account storage and ID lookup
//! - `engine` - Borrow/return/query operations over the whole store

pub mod account_registry;
pub mod catalog;
pub mod engine;
pub mod item_factory;
pub mod keyed_table;

pub use account_registry::AccountRegistry;
pub use catalog::Catalog;
pub use engine::{Store, ACCEPTED_MEDIA};
pub use item_factory::{ItemFactory, ItemParser};
pub use keyed_table::{KeyedTable, TableKey};

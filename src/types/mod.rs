//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `item`: Catalog items, categories, and their ordering key
//! - `account`: Account holders and their transaction history
//! - `error`: Error types for the rental store

pub mod account;
pub mod error;
pub mod item;

pub use account::{Account, TransactionKind, TransactionRecord};
pub use error::StoreError;
pub use item::{AccountId, CatalogItem, Category, ItemDetails, ItemId, ItemKey};

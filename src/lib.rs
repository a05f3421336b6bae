//! Rental Store Library
//! # Overview
//!
//! This library loads a movie catalog and an account roster from flat text
//! sources, then replays borrow, return, inventory, and history commands
//! against that in-memory state.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (CatalogItem, Account, StoreError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::keyed_table`] - Fixed-size chained hash table used for account lookup
//!   - [`core::catalog`] - Ordered, duplicate-free catalog and category-aware search
//!   - [`core::item_factory`] - Category registry that parses catalog records
//!   - [`core::engine`] - The store: borrow/return/query rules
//! - [`operations`] - Command decoding and dispatch
//! - [`io`] - Source readers and report rendering
//! - [`runner`] - Batch orchestration of the load and replay phases
//! - [`telemetry`] - Logging setup
//!
//! # Categories
//!
//! - **Comedy** (`F`): sorted by title, then year
//! - **Drama** (`D`): sorted by director, then title
//! - **Classic** (`C`): sorted by release month, year, then major actor
//!
//! Comedies list before dramas, dramas before classics.
//!
//! # Commands
//!
//! - **Borrow** (`B`): lend a copy, if one is on the shelf
//! - **Return** (`R`): take a copy back
//! - **Inventory** (`I`): list the catalog
//! - **History** (`H`): list one account's transactions

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod operations;
pub mod runner;
pub mod telemetry;
pub mod types;

pub use crate::core::{Catalog, ItemFactory, KeyedTable, Store};
pub use io::{write_history, write_inventory};
pub use operations::{Operation, OperationFactory};
pub use runner::{BatchRunner, SourcePaths};
pub use types::{
    Account, AccountId, CatalogItem, Category, ItemDetails, ItemId, StoreError, TransactionKind,
    TransactionRecord,
};

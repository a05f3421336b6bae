//! I/O module
//!
//! Handles source parsing and report output.
//!
//! # Components
//!
//! - `catalog_reader` - Comma-delimited catalog reader with iterator interface
//! - `line_reader` - Line-oriented reader for account and command sources
//! - `report` - Inventory and history rendering

pub mod catalog_reader;
pub mod line_reader;
pub mod report;

pub use catalog_reader::{CatalogReader, CatalogRecord};
pub use line_reader::{parse_account_line, LineReader, SourceLine};
pub use report::{write_history, write_inventory};

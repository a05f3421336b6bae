//! Error types for the rental store
//!
//! This module defines all error types that can occur while loading sources
//! and replaying commands. Messages are written to be shown to the operator
//! verbatim, since most of them end up in the run's report.
//!
//! # Error Categories
//!
//! - **Source Errors**: a source file cannot be opened or read (fatal for its phase)
//! - **Parse Errors**: malformed catalog, account, or command lines (skipped)
//! - **Unknown Tags**: unregistered category or opcode (skipped)
//! - **Lookup Errors**: account or catalog item cannot be resolved
//! - **Stock Errors**: borrow attempted with no copies on the shelf

use super::item::AccountId;
use thiserror::Error;

/// Main error type for the rental store
///
/// Every public store operation returns this on failure. Only
/// `FileUnavailable` and `IoError` stop a processing phase; every other
/// variant is reported and the next line is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A source file could not be opened
    ///
    /// This is the only error that aborts a whole load or replay phase.
    #[error("Cannot open {path}: {message}")]
    FileUnavailable {
        /// The path that could not be opened
        path: String,
        /// Reason reported by the operating system
        message: String,
    },

    /// I/O error occurred while reading a source or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A source line could not be parsed
    ///
    /// This is a recoverable error - the line is skipped and processing
    /// continues with the next one.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Catalog record carries a category tag no parser is registered for
    #[error("Unknown movie type: {tag}, discarding line: {line}")]
    UnknownCategory {
        /// The unregistered category tag
        tag: char,
        /// The discarded source line
        line: String,
    },

    /// Command line starts with an opcode no parser is registered for
    #[error("Unknown command type: {opcode}, discarding line: {line}")]
    UnknownOpcode {
        /// The unregistered opcode
        opcode: char,
        /// The discarded command line
        line: String,
    },

    /// Borrow or return requested for a medium the store does not stock
    #[error("Invalid media type {media}, discarding line: {category} {item_info}")]
    InvalidMedia {
        /// The rejected media tag
        media: char,
        /// Category tag from the command
        category: char,
        /// Free-text item search from the command
        item_info: String,
    },

    /// No account is registered under the given ID
    #[error("Invalid account ID {account}")]
    AccountNotFound {
        /// The unknown account ID
        account: AccountId,
    },

    /// A borrow or return named an account that is not registered
    #[error("Invalid account ID {account}, discarding line: {media} {category} {item_info}")]
    InvalidAccount {
        /// The unknown account ID
        account: AccountId,
        /// Media tag from the command
        media: char,
        /// Category tag from the command
        category: char,
        /// Free-text item search from the command
        item_info: String,
    },

    /// The search text did not resolve to a catalog item
    #[error("Invalid movie for account {account_name}, discarding line: {item_info}")]
    ItemNotFound {
        /// Full name of the requesting account holder
        account_name: String,
        /// Free-text item search from the command
        item_info: String,
    },

    /// Every copy of the item is already out
    #[error("{account_name} could NOT borrow {title}, out of stock")]
    OutOfStock {
        /// Full name of the requesting account holder
        account_name: String,
        /// Title of the requested item
        title: String,
    },
}

// Conversion from io::Error to StoreError
impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to StoreError
impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        match error.into_kind() {
            csv::ErrorKind::Io(io_error) => io_error.into(),
            kind => StoreError::ParseError {
                line,
                message: format!("{:?}", kind),
            },
        }
    }
}

// Helper functions for creating common errors

impl StoreError {
    /// Create a FileUnavailable error
    pub fn file_unavailable(path: &str, error: &std::io::Error) -> Self {
        StoreError::FileUnavailable {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        StoreError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(tag: char, line: &str) -> Self {
        StoreError::UnknownCategory {
            tag,
            line: line.to_string(),
        }
    }

    /// Create an UnknownOpcode error
    pub fn unknown_opcode(opcode: char, line: &str) -> Self {
        StoreError::UnknownOpcode {
            opcode,
            line: line.to_string(),
        }
    }

    /// Create an InvalidMedia error
    pub fn invalid_media(media: char, category: char, item_info: &str) -> Self {
        StoreError::InvalidMedia {
            media,
            category,
            item_info: item_info.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        StoreError::AccountNotFound { account }
    }

    /// Create an InvalidAccount error
    pub fn invalid_account(account: AccountId, media: char, category: char, item_info: &str) -> Self {
        StoreError::InvalidAccount {
            account,
            media,
            category,
            item_info: item_info.to_string(),
        }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(account_name: &str, item_info: &str) -> Self {
        StoreError::ItemNotFound {
            account_name: account_name.to_string(),
            item_info: item_info.to_string(),
        }
    }

    /// Create an OutOfStock error
    pub fn out_of_stock(account_name: &str, title: &str) -> Self {
        StoreError::OutOfStock {
            account_name: account_name.to_string(),
            title: title.to_string(),
        }
    }

    /// Whether this error should stop the current processing phase
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StoreError::FileUnavailable { .. } | StoreError::IoError { .. }
        )
    }
}

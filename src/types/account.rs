//! Account-related types for the rental store
//!
//! This module defines the Account structure and the transaction records
//! that make up an account's history.

use super::item::{AccountId, ItemId};
use std::fmt;

/// Kind of a recorded transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// A copy was lent to the account
    Borrow,
    /// A copy was brought back by the account
    Return,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Borrow => f.write_str("Borrow"),
            TransactionKind::Return => f.write_str("Return"),
        }
    }
}

/// One entry in an account's history
///
/// The item is referenced by its catalog index rather than owned; catalog
/// items are never removed, so the reference stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub item: ItemId,
}

/// Rental account holder
///
/// History is append-only and kept in the order operations were processed.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account ID
    pub id: AccountId,

    pub last_name: String,

    pub first_name: String,

    history: Vec<TransactionRecord>,
}

impl Account {
    /// Create a new account with an empty history
    ///
    /// # Arguments
    ///
    /// * `id` - The account ID
    /// * `last_name` - Family name, as given in the account source
    /// * `first_name` - Given name, as given in the account source
    pub fn new(id: AccountId, last_name: &str, first_name: &str) -> Self {
        Account {
            id,
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            history: Vec::new(),
        }
    }

    /// "First Last", as shown in reports
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Append a transaction to the end of the history
    pub fn record(&mut self, kind: TransactionKind, item: ItemId) {
        self.history.push(TransactionRecord { kind, item });
    }

    /// Transactions in the order they were recorded
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }
}

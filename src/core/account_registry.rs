//! Account management module
//!
//! This module provides the `AccountRegistry` struct which owns every account
//! loaded for the run and resolves account IDs to them.
//!
//! The AccountRegistry is responsible for:
//! - Storing accounts in load order
//! - Resolving IDs through a `KeyedTable`
//! - Handing out mutable access so the store can append history

use crate::core::keyed_table::KeyedTable;
use crate::types::{Account, AccountId};

/// Owns all accounts and the ID lookup table
///
/// Accounts live in `storage`; the table maps an ID to a position in that
/// vector. Accounts are never removed, so positions stay valid.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    storage: Vec<Account>,
    index: KeyedTable<AccountId, usize>,
}

impl AccountRegistry {
    /// Create a new AccountRegistry with no accounts
    pub fn new() -> Self {
        AccountRegistry {
            storage: Vec::new(),
            index: KeyedTable::new(),
        }
    }

    /// Register an account
    ///
    /// If the ID is already registered, lookups resolve to the newer account
    /// from now on.
    ///
    /// # Returns
    ///
    /// `true` if the ID replaced an earlier registration
    pub fn add(&mut self, account: Account) -> bool {
        let id = account.id;
        let slot = self.storage.len();
        self.storage.push(account);
        self.index.insert(id, slot).is_some()
    }

    /// Get the account registered under `id`
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.index.find(&id).map(|&slot| &self.storage[slot])
    }

    /// Get the account registered under `id` for modification
    pub fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        let slot = *self.index.find(&id)?;
        self.storage.get_mut(slot)
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of distinct account IDs
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

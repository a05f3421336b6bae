//! Rental store engine
//!
//! This module provides the `Store` that owns the catalog and the account
//! registry and exposes the borrow/return/query API that commands invoke.
//!
//! The store enforces business rules such as:
//! - Only DVDs can be borrowed or returned
//! - The account and the item must both resolve before anything changes
//! - A borrow never takes out more copies than the store owns
//!
//! Every operation validates first and mutates last, so a failed operation
//! leaves no partial effect behind.

use crate::core::account_registry::AccountRegistry;
use crate::core::catalog::Catalog;
use crate::types::{
    Account, AccountId, CatalogItem, Category, ItemId, StoreError, TransactionKind,
};

/// The only media tag the store stocks
pub const ACCEPTED_MEDIA: char = 'D';

/// In-memory state of the rental store
#[derive(Debug, Default)]
pub struct Store {
    catalog: Catalog,
    accounts: AccountRegistry,
}

impl Store {
    /// Create a store with an empty catalog and no accounts
    pub fn new() -> Self {
        Store {
            catalog: Catalog::new(),
            accounts: AccountRegistry::new(),
        }
    }

    /// Add an item to the catalog
    ///
    /// # Returns
    ///
    /// * `Some(ItemId)` - the item was added
    /// * `None` - an equal item is already in the catalog
    pub fn add_item(&mut self, item: CatalogItem) -> Option<ItemId> {
        self.catalog.insert(item)
    }

    /// Register an account
    ///
    /// # Returns
    ///
    /// `true` if the ID was already registered and now resolves to `account`
    pub fn add_account(&mut self, account: Account) -> bool {
        self.accounts.add(account)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    /// Resolve an account by ID
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account is registered under `id`
    pub fn account(&self, id: AccountId) -> Result<&Account, StoreError> {
        self.accounts
            .get(id)
            .ok_or_else(|| StoreError::account_not_found(id))
    }

    pub fn item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.catalog.get(id)
    }

    /// Items in inventory order
    pub fn inventory(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.catalog.iter()
    }

    /// Lend one copy of an item to an account
    ///
    /// # Arguments
    ///
    /// * `account_id` - The borrowing account
    /// * `media` - Media tag from the command (must be `ACCEPTED_MEDIA`)
    /// * `category` - Category tag from the command
    /// * `item_info` - Free-text search for the item
    ///
    /// # Returns
    ///
    /// The ID of the borrowed item
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The media tag is not accepted (`InvalidMedia`)
    /// - The account is not registered (`InvalidAccount`)
    /// - The search text does not resolve to an item (`ItemNotFound`)
    /// - Every copy is already out (`OutOfStock`)
    pub fn acquire(
        &mut self,
        account_id: AccountId,
        media: char,
        category: char,
        item_info: &str,
    ) -> Result<ItemId, StoreError> {
        let item_id = self.resolve(account_id, media, category, item_info)?;

        if let Some(item) = self.catalog.get(item_id).filter(|item| item.available() == 0) {
            let name = self.account(account_id)?.full_name();
            return Err(StoreError::out_of_stock(&name, item.title()));
        }

        if let Some(item) = self.catalog.get_mut(item_id) {
            item.check_out();
        }
        if let Some(account) = self.accounts.get_mut(account_id) {
            account.record(TransactionKind::Borrow, item_id);
        }

        Ok(item_id)
    }

    /// Take one copy of an item back from an account
    ///
    /// If no copies are outstanding the count stays at zero, but the return
    /// is still recorded in the account's history.
    ///
    /// # Returns
    ///
    /// The ID of the returned item
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The media tag is not accepted (`InvalidMedia`)
    /// - The account is not registered (`InvalidAccount`)
    /// - The search text does not resolve to an item (`ItemNotFound`)
    pub fn release(
        &mut self,
        account_id: AccountId,
        media: char,
        category: char,
        item_info: &str,
    ) -> Result<ItemId, StoreError> {
        let item_id = self.resolve(account_id, media, category, item_info)?;

        if let Some(item) = self.catalog.get_mut(item_id) {
            if !item.check_in() {
                tracing::debug!(
                    account = account_id,
                    title = item.title(),
                    "return recorded with no copies outstanding"
                );
            }
        }

        if let Some(account) = self.accounts.get_mut(account_id) {
            account.record(TransactionKind::Return, item_id);
        }

        Ok(item_id)
    }

    /// Validation shared by borrow and return, in reporting order
    fn resolve(
        &self,
        account_id: AccountId,
        media: char,
        category: char,
        item_info: &str,
    ) -> Result<ItemId, StoreError> {
        if media != ACCEPTED_MEDIA {
            return Err(StoreError::invalid_media(media, category, item_info));
        }

        let account = self
            .accounts
            .get(account_id)
            .ok_or_else(|| StoreError::invalid_account(account_id, media, category, item_info))?;

        Category::from_tag(category)
            .and_then(|category| self.catalog.find(category, item_info))
            .ok_or_else(|| StoreError::item_not_found(&account.full_name(), item_info))
    }
}

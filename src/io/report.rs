//! Report rendering for inventory and account history
//!
//! Both functions write plain text lines to any `Write` sink and map write
//! failures to `StoreError::IoError`.

use crate::core::Store;
use crate::types::{AccountId, StoreError};
use std::io::Write;

/// Write the catalog in inventory order
///
/// Output is an `INVENTORY:` header, one line per item, and a blank line.
pub fn write_inventory(store: &Store, output: &mut dyn Write) -> Result<(), StoreError> {
    writeln!(output, "INVENTORY:")?;
    for item in store.inventory() {
        writeln!(output, "{}", item)?;
    }
    writeln!(output)?;
    Ok(())
}

/// Write one account's history block
///
/// Output is a `History for <id> <name>:` header, then either one line per
/// transaction or a single `No history for <name>` notice, then a blank line.
///
/// # Errors
///
/// Returns `AccountNotFound` without writing anything if `account_id` is not
/// registered.
pub fn write_history(
    store: &Store,
    account_id: AccountId,
    output: &mut dyn Write,
) -> Result<(), StoreError> {
    let account = store.account(account_id)?;
    let name = account.full_name();

    writeln!(output, "History for {} {}:", account.id, name)?;
    if account.history().is_empty() {
        writeln!(output, "No history for {}", name)?;
    }
    for record in account.history() {
        if let Some(item) = store.item(record.item) {
            writeln!(output, "{} {} {}", record.kind, name, item.title())?;
        }
    }
    writeln!(output)?;
    Ok(())
}

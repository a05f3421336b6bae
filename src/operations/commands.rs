//! Executable store commands
//!
//! One struct per command kind, each with a `parse` function that the
//! `OperationFactory` registers under the command's opcode.
//!
//! | Opcode | Command | Grammar |
//! |--------|---------|---------|
//! | `B` | [`Borrow`] | `B <account> <media> <category> <search text>` |
//! | `R` | [`Return`] | `R <account> <media> <category> <search text>` |
//! | `I` | [`Inventory`] | `I` |
//! | `H` | [`History`] | `H <account>` |

use super::cursor::LineCursor;
use super::Operation;
use crate::core::Store;
use crate::io::report::{write_history, write_inventory};
use crate::types::{AccountId, StoreError};
use std::fmt;
use std::io::Write;

/// Fields shared by borrow and return commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub account: AccountId,
    pub media: char,
    pub category: char,
    pub item_info: String,
}

impl ItemRequest {
    fn parse(line: &str) -> Result<Self, StoreError> {
        let mut cursor = LineCursor::new(line);
        let malformed = || StoreError::parse(None, format!("Malformed command: {}", line));

        cursor.next_char().ok_or_else(malformed)?;
        let account = cursor.next_int().ok_or_else(malformed)?;
        let media = cursor.next_char().ok_or_else(malformed)?;
        let category = cursor.next_char().ok_or_else(malformed)?;

        Ok(ItemRequest {
            account,
            media,
            category,
            item_info: cursor.remainder().to_string(),
        })
    }
}

/// Lend a copy of an item to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrow(pub ItemRequest);

impl Borrow {
    pub const OPCODE: char = 'B';

    pub fn parse(line: &str) -> Result<Box<dyn Operation>, StoreError> {
        Ok(Box::new(Borrow(ItemRequest::parse(line)?)))
    }
}

impl Operation for Borrow {
    fn execute(&self, store: &mut Store, _output: &mut dyn Write) -> Result<(), StoreError> {
        let request = &self.0;
        store
            .acquire(
                request.account,
                request.media,
                request.category,
                &request.item_info,
            )
            .map(|_| ())
    }
}

impl fmt::Display for Borrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Borrow: Account {} borrows {}", self.0.account, self.0.item_info)
    }
}

/// Take a copy of an item back from an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return(pub ItemRequest);

impl Return {
    pub const OPCODE: char = 'R';

    pub fn parse(line: &str) -> Result<Box<dyn Operation>, StoreError> {
        Ok(Box::new(Return(ItemRequest::parse(line)?)))
    }
}

impl Operation for Return {
    fn execute(&self, store: &mut Store, _output: &mut dyn Write) -> Result<(), StoreError> {
        let request = &self.0;
        store
            .release(
                request.account,
                request.media,
                request.category,
                &request.item_info,
            )
            .map(|_| ())
    }
}

impl fmt::Display for Return {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Return: Account {} returns {}", self.0.account, self.0.item_info)
    }
}

/// List the whole catalog in inventory order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inventory;

impl Inventory {
    pub const OPCODE: char = 'I';

    pub fn parse(_line: &str) -> Result<Box<dyn Operation>, StoreError> {
        Ok(Box::new(Inventory))
    }
}

impl Operation for Inventory {
    fn execute(&self, store: &mut Store, output: &mut dyn Write) -> Result<(), StoreError> {
        write_inventory(store, output)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Display Inventory")
    }
}

/// List one account's transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct History {
    pub account: AccountId,
}

impl History {
    pub const OPCODE: char = 'H';

    pub fn parse(line: &str) -> Result<Box<dyn Operation>, StoreError> {
        let mut cursor = LineCursor::new(line);
        cursor.next_char();
        let account = cursor
            .next_int()
            .ok_or_else(|| StoreError::parse(None, format!("Malformed command: {}", line)))?;
        Ok(Box::new(History { account }))
    }
}

impl Operation for History {
    fn execute(&self, store: &mut Store, output: &mut dyn Write) -> Result<(), StoreError> {
        write_history(store, self.account, output)
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display History for Account {}", self.account)
    }
}

//! Command dispatch
//!
//! A command line is decoded by the parser registered for its first
//! character into a boxed [`Operation`], which is then executed against the
//! [`Store`]. The registry is an explicit `OperationFactory` value owned by
//! the batch runner.

pub mod commands;
pub mod cursor;

pub use commands::{Borrow, History, Inventory, ItemRequest, Return};

use crate::core::Store;
use crate::types::StoreError;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

/// A decoded command, ready to run against the store
///
/// `Display` gives a short description used in debug logs.
pub trait Operation: fmt::Debug + fmt::Display {
    /// Run the command
    ///
    /// Listings are written to `output`. Failures are returned, not written;
    /// the caller decides how to report them.
    fn execute(&self, store: &mut Store, output: &mut dyn Write) -> Result<(), StoreError>;
}

/// Decodes one command line into an operation
pub type OperationParser = fn(&str) -> Result<Box<dyn Operation>, StoreError>;

/// Registry of command parsers keyed by opcode
#[derive(Clone)]
pub struct OperationFactory {
    parsers: BTreeMap<char, OperationParser>,
}

impl OperationFactory {
    /// Create a factory with no opcodes registered
    pub fn empty() -> Self {
        OperationFactory {
            parsers: BTreeMap::new(),
        }
    }

    /// Create a factory with borrow, return, inventory, and history registered
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register(Borrow::OPCODE, Borrow::parse);
        factory.register(Return::OPCODE, Return::parse);
        factory.register(Inventory::OPCODE, Inventory::parse);
        factory.register(History::OPCODE, History::parse);
        factory
    }

    /// Associate `opcode` with `parser`, replacing any earlier registration
    pub fn register(&mut self, opcode: char, parser: OperationParser) {
        self.parsers.insert(opcode, parser);
    }

    /// Decode a command line
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The line is empty (`ParseError`)
    /// - No parser is registered for the first character (`UnknownOpcode`)
    /// - The registered parser rejects the line (`ParseError`)
    pub fn create(&self, line: &str) -> Result<Box<dyn Operation>, StoreError> {
        let opcode = line
            .chars()
            .next()
            .ok_or_else(|| StoreError::parse(None, "Empty command line"))?;

        let parser = self
            .parsers
            .get(&opcode)
            .ok_or_else(|| StoreError::unknown_opcode(opcode, line))?;
        parser(line)
    }
}

impl fmt::Debug for OperationFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFactory")
            .field("opcodes", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for OperationFactory {
    fn default() -> Self {
        Self::new()
    }
}

//! Batch replay runner
//!
//! This module drives a whole run: load the catalog, load the accounts, then
//! replay the command file against the resulting `Store`.
//!
//! # Design
//!
//! `BatchRunner` owns the two registries (category parsers and command
//! parsers) and focuses on orchestration, delegating:
//! - Source parsing to `CatalogReader` and `LineReader`
//! - Item construction to `ItemFactory`
//! - Command decoding to `OperationFactory`
//! - Business rules to `Store`
//!
//! # Error Handling
//!
//! A source that cannot be opened fails its phase and stops the run. Every
//! other problem is confined to its line: parse failures are logged through
//! `tracing`, and operator-facing diagnostics (unknown tags, rejected
//! borrows and returns) are written to the output next to the listings.

use crate::core::{ItemFactory, Store};
use crate::io::catalog_reader::{CatalogReader, CatalogRecord};
use crate::io::line_reader::{parse_account_line, LineReader, SourceLine};
use crate::operations::OperationFactory;
use crate::types::{CatalogItem, StoreError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Locations of the three source files for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub catalog: PathBuf,
    pub accounts: PathBuf,
    pub commands: PathBuf,
}

/// Loads sources into a `Store` and replays commands against it
///
/// # Examples
///
/// ```no_run
/// use rental_store::runner::{BatchRunner, SourcePaths};
///
/// let paths = SourcePaths {
///     catalog: "data4movies.txt".into(),
///     accounts: "data4customers.txt".into(),
///     commands: "data4commands.txt".into(),
/// };
/// let mut output = std::io::stdout();
///
/// BatchRunner::new()
///     .run(&paths, &mut output)
///     .expect("Run failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    items: ItemFactory,
    operations: OperationFactory,
}

impl BatchRunner {
    /// Create a runner with the standard categories and commands registered
    pub fn new() -> Self {
        Self::with_factories(ItemFactory::new(), OperationFactory::new())
    }

    /// Create a runner with caller-supplied registries
    pub fn with_factories(items: ItemFactory, operations: OperationFactory) -> Self {
        BatchRunner { items, operations }
    }

    /// Run all three phases and return the final store state
    ///
    /// # Errors
    ///
    /// Returns the first fatal error (a source that cannot be opened, or a
    /// failed write or flush of `output`). Later phases are not attempted.
    pub fn run(&self, paths: &SourcePaths, output: &mut dyn Write) -> Result<Store, StoreError> {
        let mut store = Store::new();

        let items = self.load_catalog(&mut store, &paths.catalog, output)?;
        tracing::info!(items, path = %paths.catalog.display(), "catalog loaded");

        let accounts = self.load_accounts(&mut store, &paths.accounts)?;
        tracing::info!(accounts, path = %paths.accounts.display(), "accounts loaded");

        let commands = self.process_commands(&mut store, &paths.commands, output)?;
        tracing::info!(commands, path = %paths.commands.display(), "commands replayed");

        output.flush()?;
        Ok(store)
    }

    /// Load a catalog file into `store`
    ///
    /// # Returns
    ///
    /// The number of items added to the catalog
    pub fn load_catalog(
        &self,
        store: &mut Store,
        path: &Path,
        output: &mut dyn Write,
    ) -> Result<usize, StoreError> {
        let reader = CatalogReader::open(path)?;
        self.load_catalog_records(store, reader, output)
    }

    /// Load catalog lines from any readable source
    pub fn load_catalog_from<R: Read>(
        &self,
        store: &mut Store,
        source: R,
        output: &mut dyn Write,
    ) -> Result<usize, StoreError> {
        self.load_catalog_records(store, CatalogReader::from_reader(source), output)
    }

    fn load_catalog_records<I>(
        &self,
        store: &mut Store,
        records: I,
        output: &mut dyn Write,
    ) -> Result<usize, StoreError>
    where
        I: Iterator<Item = Result<CatalogRecord, StoreError>>,
    {
        let mut added = 0;

        for result in records {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping catalog line");
                    continue;
                }
            };

            match self.build_item(&record) {
                Ok(item) => {
                    if store.add_item(item).is_some() {
                        added += 1;
                    } else {
                        tracing::debug!(line = record.line, "duplicate catalog entry ignored");
                    }
                }
                Err(e @ StoreError::UnknownCategory { .. }) => writeln!(output, "{}", e)?,
                Err(e) => tracing::warn!(line = record.line, error = %e, "skipping catalog line"),
            }
        }

        Ok(added)
    }

    fn build_item(&self, record: &CatalogRecord) -> Result<CatalogItem, StoreError> {
        self.items
            .create(
                record.tag,
                record.total,
                &record.director,
                &record.title,
                &record.extra,
            )
            .map_err(|e| match e {
                StoreError::UnknownCategory { tag, .. } => {
                    StoreError::unknown_category(tag, &record.raw)
                }
                e => e,
            })
    }

    /// Load an account file into `store`
    ///
    /// # Returns
    ///
    /// The number of account lines accepted
    pub fn load_accounts(&self, store: &mut Store, path: &Path) -> Result<usize, StoreError> {
        let reader = LineReader::open(path)?;
        self.load_account_lines(store, reader)
    }

    /// Load account lines from any readable source
    pub fn load_accounts_from<R: Read>(
        &self,
        store: &mut Store,
        source: R,
    ) -> Result<usize, StoreError> {
        self.load_account_lines(store, LineReader::from_reader(source))
    }

    fn load_account_lines<I>(&self, store: &mut Store, lines: I) -> Result<usize, StoreError>
    where
        I: Iterator<Item = Result<SourceLine, StoreError>>,
    {
        let mut added = 0;

        for result in lines {
            let line = match result {
                Ok(line) => line,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping account line");
                    continue;
                }
            };
            match parse_account_line(&line) {
                Ok(account) => {
                    let id = account.id;
                    if store.add_account(account) {
                        tracing::warn!(account = id, line = line.number, "duplicate account ID replaces earlier entry");
                    }
                    added += 1;
                }
                Err(e) => tracing::warn!(error = %e, "skipping account line"),
            }
        }

        Ok(added)
    }

    /// Replay a command file against `store`
    ///
    /// # Returns
    ///
    /// The number of commands that executed successfully
    pub fn process_commands(
        &self,
        store: &mut Store,
        path: &Path,
        output: &mut dyn Write,
    ) -> Result<usize, StoreError> {
        let reader = LineReader::open(path)?;
        self.process_command_lines(store, reader, output)
    }

    /// Replay command lines from any readable source
    pub fn process_commands_from<R: Read>(
        &self,
        store: &mut Store,
        source: R,
        output: &mut dyn Write,
    ) -> Result<usize, StoreError> {
        self.process_command_lines(store, LineReader::from_reader(source), output)
    }

    fn process_command_lines<I>(
        &self,
        store: &mut Store,
        lines: I,
        output: &mut dyn Write,
    ) -> Result<usize, StoreError>
    where
        I: Iterator<Item = Result<SourceLine, StoreError>>,
    {
        let mut executed = 0;

        for result in lines {
            let line = match result {
                Ok(line) => line,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping command line");
                    continue;
                }
            };

            let operation = match self.operations.create(&line.text) {
                Ok(operation) => operation,
                Err(e @ StoreError::UnknownOpcode { .. }) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
                Err(e) => {
                    tracing::warn!(line = line.number, error = %e, "skipping command line");
                    continue;
                }
            };

            tracing::debug!(line = line.number, operation = %operation, "executing");
            match operation.execute(store, output) {
                Ok(()) => executed += 1,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => writeln!(output, "{}", e)?,
            }
        }

        Ok(executed)
    }
}

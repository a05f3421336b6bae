//! Catalog source reader with iterator interface
//!
//! Provides a streaming iterator over catalog records from a comma-delimited
//! text file, one movie per line:
//!
//! ```text
//! F, 10, Nora Ephron, You've Got Mail, 1998
//! C, 10, George Cukor, Holiday, Katherine Hepburn 9 1938
//! ```
//!
//! # Design
//!
//! The reader uses `csv::Reader` configured for headerless, variable-width,
//! unquoted input. Fields are kept untrimmed so that joining them with commas
//! gives back the source line exactly; trimming happens during conversion.
//! The first four fields are fixed (category tag, copy count, director,
//! title); everything after them is trimmed, rejoined with commas, and handed
//! to the category parser.
//!
//! # Error Handling
//!
//! - Fatal errors (file cannot be opened) are returned from `new()`
//! - Individual malformed lines are yielded as `Err` items with line numbers
//! - Blank lines are skipped

use crate::types::StoreError;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Minimum number of fields in a catalog line
const MIN_FIELDS: usize = 5;

/// One catalog line split into its fixed fields and trailing extra
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// 1-based source line number
    pub line: u64,
    pub tag: char,
    pub total: u32,
    pub director: String,
    pub title: String,
    /// Fields after the title, rejoined with commas
    pub extra: String,
    /// The line as written in the source, without its line terminator
    pub raw: String,
}

/// Streaming catalog reader
#[derive(Debug)]
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl CatalogReader<File> {
    /// Open a catalog file
    ///
    /// # Errors
    ///
    /// Returns `FileUnavailable` if the file could not be opened
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path)
            .map_err(|e| StoreError::file_unavailable(&path.display().to_string(), &e))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> CatalogReader<R> {
    /// Read catalog lines from any readable source
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        CatalogReader {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for CatalogReader<R> {
    type Item = Result<CatalogRecord, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    if self.record.iter().all(|field| field.trim().is_empty()) {
                        continue;
                    }
                    let line = self.record.position().map_or(0, |pos| pos.line());
                    return Some(convert_record(&self.record, line));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Split a raw record into a `CatalogRecord`
pub fn convert_record(record: &StringRecord, line: u64) -> Result<CatalogRecord, StoreError> {
    let raw = record.iter().collect::<Vec<_>>().join(",");

    if record.len() < MIN_FIELDS {
        return Err(StoreError::parse(
            Some(line),
            format!("Invalid movie format: {}", raw),
        ));
    }

    let tag = trimmed(record, 0)
        .chars()
        .next()
        .ok_or_else(|| StoreError::parse(Some(line), format!("Missing category in: {}", raw)))?;

    let total = trimmed(record, 1).parse::<u32>().map_err(|_| {
        StoreError::parse(Some(line), format!("Invalid stock number in: {}", raw))
    })?;

    let extra = record
        .iter()
        .skip(MIN_FIELDS - 1)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",");

    Ok(CatalogRecord {
        line,
        tag,
        total,
        director: trimmed(record, 2).to_string(),
        title: trimmed(record, 3).to_string(),
        extra,
        raw,
    })
}

fn trimmed(record: &StringRecord, index: usize) -> &str {
    record[index].trim()
}

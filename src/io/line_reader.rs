//! Line-oriented source reader
//!
//! Account and command sources are plain text with one record per line. The
//! `LineReader` yields each non-blank line with its 1-based line number and
//! leaves interpretation to the caller.
//!
//! Lines are read as raw bytes and decoded one at a time, so a line that is
//! not valid UTF-8 is a `ParseError` for that line only. `IoError` is reserved
//! for failures of the underlying reader.

use crate::types::{Account, AccountId, StoreError};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A non-blank source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number
    pub number: u64,
    pub text: String,
}

/// Streaming reader over non-blank lines
#[derive(Debug)]
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
    number: u64,
}

impl LineReader<File> {
    /// Open a line-oriented source file
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

impl<R: Read> LineReader<R> {
    pub fn from_reader(source: R) -> Self {
        LineReader {
            reader: BufReader::new(source),
            buffer: Vec::new(),
            number: 0,
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<SourceLine, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.number += 1;

            let bytes = trim_line_ending(&self.buffer);
            let text = match std::str::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => {
                    return Some(Err(StoreError::parse(
                        Some(self.number),
                        format!("Line is not valid UTF-8: {}", String::from_utf8_lossy(bytes)),
                    )))
                }
            };
            if text.trim().is_empty() {
                continue;
            }

            return Some(Ok(SourceLine {
                number: self.number,
                text: text.to_string(),
            }));
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse an account line: `<id> <last name> <first name>`
///
/// Tokens are whitespace-delimited; anything after the first name is ignored.
pub fn parse_account_line(line: &SourceLine) -> Result<Account, StoreError> {
    let malformed = || {
        StoreError::parse(
            Some(line.number),
            format!("Error parsing account line: {}", line.text),
        )
    };

    let mut tokens = line.text.split_whitespace();
    let id = tokens
        .next()
        .and_then(|t| t.parse::<AccountId>().ok())
        .ok_or_else(malformed)?;
    let last_name = tokens.next().ok_or_else(malformed)?;
    let first_name = tokens.next().ok_or_else(malformed)?;

    Ok(Account::new(id, last_name, first_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line(text: &str) -> SourceLine {
        SourceLine {
            number: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_yields_numbered_non_blank_lines() {
        let content = "I\n\n  \nH 1000\r\nB 1000 D F Bananas, 1971";
        let lines: Vec<_> = LineReader::from_reader(content.as_bytes())
            .map(Result::unwrap)
            .collect();

        assert_eq!(
            lines,
            vec![
                SourceLine { number: 1, text: "I".to_string() },
                SourceLine { number: 4, text: "H 1000".to_string() },
                SourceLine { number: 5, text: "B 1000 D F Bananas, 1971".to_string() },
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_line_is_skippable() {
        let content: &[u8] = b"H 7\nH \xff\xfe 7\nI\n";
        let lines: Vec<_> = LineReader::from_reader(content).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_ref().unwrap().text, "H 7");
        assert!(matches!(
            lines[1],
            Err(StoreError::ParseError { line: Some(2), .. })
        ));
        assert_eq!(
            lines[2].as_ref().unwrap(),
            &SourceLine { number: 3, text: "I".to_string() }
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let lines: Vec<_> = LineReader::from_reader("I\r\nH 7".as_bytes())
            .map(Result::unwrap)
            .collect();

        assert_eq!(lines[0].text, "I");
        assert_eq!(lines[1].text, "H 7");
    }

    #[test]
    fn test_open_missing_file() {
        let result = LineReader::open(Path::new("nonexistent_customers.txt"));
        assert!(matches!(result, Err(StoreError::FileUnavailable { .. })));
    }

    #[rstest]
    #[case::simple("3333 Witch Wicked", 3333, "Wicked Witch")]
    #[case::extra_spaces("  7   Mouse\tMinnie  ", 7, "Minnie Mouse")]
    #[case::trailing_tokens("1000 Mouse Mickey extra", 1000, "Mickey Mouse")]
    fn test_parse_account_line(#[case] text: &str, #[case] id: AccountId, #[case] name: &str) {
        let account = parse_account_line(&line(text)).unwrap();
        assert_eq!(account.id, id);
        assert_eq!(account.full_name(), name);
        assert!(account.history().is_empty());
    }

    #[rstest]
    #[case::missing_first_name("1000 Mouse")]
    #[case::non_numeric_id("abc Mouse Mickey")]
    #[case::negative_id("-4 Mouse Mickey")]
    fn test_parse_account_line_rejects_malformed(#[case] text: &str) {
        assert!(matches!(
            parse_account_line(&line(text)),
            Err(StoreError::ParseError { line: Some(1), .. })
        ));
    }
}

//! Token reader for command lines
//!
//! Commands mix single-character tokens, integers, and a free-text tail. The
//! cursor reads them left to right: each `next_*` call skips leading
//! whitespace and consumes only as much as the token needs, so `"B 7 DF"`
//! yields `'B'`, `7`, `'D'`, `'F'`.

#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    rest: &'a str,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        LineCursor { rest: line }
    }

    /// Next non-whitespace character
    pub fn next_char(&mut self) -> Option<char> {
        let trimmed = self.rest.trim_start();
        let c = trimmed.chars().next()?;
        self.rest = &trimmed[c.len_utf8()..];
        Some(c)
    }

    /// Next run of digits (with optional sign), parsed as `T`
    pub fn next_int<T: std::str::FromStr>(&mut self) -> Option<T> {
        let trimmed = self.rest.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['+', '-']));
        let digits_len = trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits_len == 0 {
            return None;
        }

        let (token, rest) = trimmed.split_at(sign_len + digits_len);
        let value = token.parse().ok()?;
        self.rest = rest;
        Some(value)
    }

    /// Everything left on the line, minus one separating space
    pub fn remainder(self) -> &'a str {
        self.rest.strip_prefix(' ').unwrap_or(self.rest)
    }
}

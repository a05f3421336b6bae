//! Category registry for building catalog items
//!
//! The `ItemFactory` maps a one-character category tag to a parser that turns
//! the trailing fields of a catalog record into the right `CatalogItem`. The
//! registry is built explicitly by whoever owns the run, so there is no
//! global registration order to worry about.

use crate::types::{CatalogItem, Category, StoreError};
use std::collections::BTreeMap;
use std::fmt;

/// Builds an item from `(total, director, title, extra)`
///
/// `extra` is everything after the title, with any inner commas restored.
pub type ItemParser = fn(u32, &str, &str, &str) -> Result<CatalogItem, StoreError>;

/// Registry of category parsers keyed by tag
#[derive(Clone)]
pub struct ItemFactory {
    parsers: BTreeMap<char, ItemParser>,
}

impl ItemFactory {
    /// Create a factory with no categories registered
    pub fn empty() -> Self {
        ItemFactory {
            parsers: BTreeMap::new(),
        }
    }

    /// Create a factory with the comedy, drama, and classic parsers registered
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register(Category::Comedy.tag(), parse_comedy);
        factory.register(Category::Drama.tag(), parse_drama);
        factory.register(Category::Classic.tag(), parse_classic);
        factory
    }

    /// Associate `tag` with `parser`, replacing any earlier registration
    pub fn register(&mut self, tag: char, parser: ItemParser) {
        self.parsers.insert(tag, parser);
    }

    pub fn is_registered(&self, tag: char) -> bool {
        self.parsers.contains_key(&tag)
    }

    /// Build an item for the category registered under `tag`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No parser is registered for `tag` (`UnknownCategory`, `line` is left empty
    ///   for the caller to fill in)
    /// - The category parser rejects `extra` (`ParseError`)
    pub fn create(
        &self,
        tag: char,
        total: u32,
        director: &str,
        title: &str,
        extra: &str,
    ) -> Result<CatalogItem, StoreError> {
        let parser = self
            .parsers
            .get(&tag)
            .ok_or_else(|| StoreError::unknown_category(tag, ""))?;
        parser(total, director, title, extra)
    }
}

impl fmt::Debug for ItemFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemFactory")
            .field("tags", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_year(extra: &str, category: Category) -> Result<i32, StoreError> {
    extra.trim().parse().map_err(|_| {
        StoreError::parse(
            None,
            format!(
                "Invalid year for {}: {}",
                category.label().to_lowercase(),
                extra
            ),
        )
    })
}

/// `extra` is the release year
pub fn parse_comedy(
    total: u32,
    director: &str,
    title: &str,
    extra: &str,
) -> Result<CatalogItem, StoreError> {
    let year = parse_year(extra, Category::Comedy)?;
    Ok(CatalogItem::comedy(total, director, title, year))
}

/// `extra` is the release year
pub fn parse_drama(
    total: u32,
    director: &str,
    title: &str,
    extra: &str,
) -> Result<CatalogItem, StoreError> {
    let year = parse_year(extra, Category::Drama)?;
    Ok(CatalogItem::drama(total, director, title, year))
}

/// `extra` is "First Last month year"; commas are treated as whitespace
pub fn parse_classic(
    total: u32,
    director: &str,
    title: &str,
    extra: &str,
) -> Result<CatalogItem, StoreError> {
    let invalid = || StoreError::parse(None, format!("Invalid classic movie format: {}", extra));

    let normalized = extra.replace(',', " ");
    let mut tokens = normalized.split_whitespace();

    let (first, last) = match (tokens.next(), tokens.next()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(invalid()),
    };
    let month = tokens
        .next()
        .and_then(|t| t.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let year = tokens
        .next()
        .and_then(|t| t.parse::<i32>().ok())
        .ok_or_else(invalid)?;

    let performer = format!("{} {}", first, last);
    Ok(CatalogItem::classic(
        total, director, title, &performer, month, year,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemDetails;
    use rstest::rstest;

    #[test]
    fn test_create_comedy() {
        let factory = ItemFactory::new();
        let item = factory
            .create('F', 5, "Woody Allen", "Bananas", "1971")
            .unwrap();

        assert_eq!(item.category(), Category::Comedy);
        assert_eq!(item.total(), 5);
        assert_eq!(item.outstanding(), 0);
        assert_eq!(item.details(), &ItemDetails::Comedy { year: 1971 });
    }

    #[test]
    fn test_create_drama() {
        let factory = ItemFactory::new();
        let item = factory
            .create('D', 10, "Steven Spielberg", "Schindler's List", "1993")
            .unwrap();

        assert_eq!(item.category(), Category::Drama);
        assert_eq!(item.director(), "Steven Spielberg");
        assert_eq!(item.details(), &ItemDetails::Drama { year: 1993 });
    }

    #[rstest]
    #[case::no_comma("Katherine Hepburn 9 1938")]
    #[case::comma_before_date("Katherine Hepburn, 9 1938")]
    #[case::extra_whitespace("  Katherine   Hepburn ,  9   1938 ")]
    fn test_create_classic(#[case] extra: &str) {
        let factory = ItemFactory::new();
        let item = factory
            .create('C', 10, "George Cukor", "Holiday", extra)
            .unwrap();

        assert_eq!(
            item.details(),
            &ItemDetails::Classic {
                performer: "Katherine Hepburn".to_string(),
                month: 9,
                year: 1938,
            }
        );
    }

    #[rstest]
    #[case::comedy_bad_year('F', "nineteen")]
    #[case::comedy_empty('F', "")]
    #[case::drama_bad_year('D', "19x3")]
    #[case::classic_missing_year('C', "Katherine Hepburn 9")]
    #[case::classic_missing_name('C', "Hepburn 9 1938")]
    #[case::classic_bad_month('C', "Katherine Hepburn Sep 1938")]
    fn test_create_rejects_malformed_extra(#[case] tag: char, #[case] extra: &str) {
        let factory = ItemFactory::new();
        let result = factory.create(tag, 1, "Dir", "Title", extra);

        assert!(matches!(result, Err(StoreError::ParseError { .. })));
    }

    #[test]
    fn test_create_unknown_tag() {
        let factory = ItemFactory::new();
        let result = factory.create('Z', 1, "Dir", "Title", "1999");

        assert!(matches!(
            result,
            Err(StoreError::UnknownCategory { tag: 'Z', .. })
        ));
    }

    #[test]
    fn test_register_custom_parser() {
        let mut factory = ItemFactory::empty();
        assert!(!factory.is_registered('X'));

        factory.register('X', parse_comedy);
        assert!(factory.is_registered('X'));

        let item = factory.create('X', 1, "Dir", "Title", "2001").unwrap();
        assert_eq!(item.category(), Category::Comedy);
    }
}

//! Catalog item types for the rental store
//!
//! This module defines the movie categories, the catalog item record, and the
//! ordering key that decides both inventory order and uniqueness.

use std::borrow::Cow;
use std::fmt;

/// Account identifier
pub type AccountId = u32;

/// Stable index of an item inside the catalog
///
/// Items are never removed, so an `ItemId` handed out once stays valid for
/// the whole run.
pub type ItemId = usize;

/// Movie categories carried by the store
///
/// Variant order is the inventory order: every comedy lists before every
/// drama, and every drama before every classic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Tag `F`, keyed by title then year
    Comedy,
    /// Tag `D`, keyed by director then title
    Drama,
    /// Tag `C`, keyed by release month, year, then lead performer
    Classic,
}

impl Category {
    /// All categories in inventory order
    pub const ALL: [Category; 3] = [Category::Comedy, Category::Drama, Category::Classic];

    /// One-character tag used in catalog and command sources
    pub fn tag(self) -> char {
        match self {
            Category::Comedy => 'F',
            Category::Drama => 'D',
            Category::Classic => 'C',
        }
    }

    /// Look up a category by its source tag
    pub fn from_tag(tag: char) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.tag() == tag)
    }

    /// Label used in the inventory listing
    pub fn label(self) -> &'static str {
        match self {
            Category::Comedy => "Comedy",
            Category::Drama => "Drama",
            Category::Classic => "Classic",
        }
    }
}

/// Category-specific fields of a catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDetails {
    Comedy {
        year: i32,
    },
    Drama {
        year: i32,
    },
    Classic {
        /// "First Last" of the major actor
        performer: String,
        month: u32,
        year: i32,
    },
}

/// A movie held in the catalog
///
/// Tracks how many copies the store owns (`total`) and how many are
/// currently lent out (`outstanding`). `outstanding <= total` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    total: u32,
    outstanding: u32,
    director: String,
    title: String,
    details: ItemDetails,
}

/// Ordering and identity key of a catalog item
///
/// The derived `Ord` compares the variant first, which encodes category
/// priority, then the category's own fields in declaration order. The same
/// type is built from free-text search input, so lookups compare exactly the
/// fields that define uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemKey<'a> {
    Comedy {
        title: Cow<'a, str>,
        year: i32,
    },
    Drama {
        director: Cow<'a, str>,
        title: Cow<'a, str>,
    },
    Classic {
        month: u32,
        year: i32,
        performer: Cow<'a, str>,
    },
}

impl ItemKey<'_> {
    /// Category the key belongs to
    pub fn category(&self) -> Category {
        match self {
            ItemKey::Comedy { .. } => Category::Comedy,
            ItemKey::Drama { .. } => Category::Drama,
            ItemKey::Classic { .. } => Category::Classic,
        }
    }
}

impl CatalogItem {
    /// Create a comedy with no copies lent out
    pub fn comedy(total: u32, director: &str, title: &str, year: i32) -> Self {
        Self::with_details(total, director, title, ItemDetails::Comedy { year })
    }

    /// Create a drama with no copies lent out
    pub fn drama(total: u32, director: &str, title: &str, year: i32) -> Self {
        Self::with_details(total, director, title, ItemDetails::Drama { year })
    }

    /// Create a classic with no copies lent out
    pub fn classic(
        total: u32,
        director: &str,
        title: &str,
        performer: &str,
        month: u32,
        year: i32,
    ) -> Self {
        Self::with_details(
            total,
            director,
            title,
            ItemDetails::Classic {
                performer: performer.to_string(),
                month,
                year,
            },
        )
    }

    fn with_details(total: u32, director: &str, title: &str, details: ItemDetails) -> Self {
        CatalogItem {
            total,
            outstanding: 0,
            director: director.to_string(),
            title: title.to_string(),
            details,
        }
    }

    pub fn category(&self) -> Category {
        match self.details {
            ItemDetails::Comedy { .. } => Category::Comedy,
            ItemDetails::Drama { .. } => Category::Drama,
            ItemDetails::Classic { .. } => Category::Classic,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn outstanding(&self) -> u32 {
        self.outstanding
    }

    /// Copies still on the shelf
    pub fn available(&self) -> u32 {
        self.total - self.outstanding
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    /// Borrowed view of the fields that order and identify this item
    pub fn key(&self) -> ItemKey<'_> {
        match &self.details {
            ItemDetails::Comedy { year } => ItemKey::Comedy {
                title: Cow::Borrowed(&self.title),
                year: *year,
            },
            ItemDetails::Drama { .. } => ItemKey::Drama {
                director: Cow::Borrowed(&self.director),
                title: Cow::Borrowed(&self.title),
            },
            ItemDetails::Classic {
                performer,
                month,
                year,
            } => ItemKey::Classic {
                month: *month,
                year: *year,
                performer: Cow::Borrowed(performer),
            },
        }
    }

    /// Lend one copy out
    ///
    /// Returns `false` and leaves the counts untouched when every copy is
    /// already out.
    pub fn check_out(&mut self) -> bool {
        if self.outstanding < self.total {
            self.outstanding += 1;
            true
        } else {
            false
        }
    }

    /// Take one copy back
    ///
    /// Returns `false` when nothing was outstanding; the count never drops
    /// below zero.
    pub fn check_in(&mut self) -> bool {
        if self.outstanding > 0 {
            self.outstanding -= 1;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.category().label();
        match &self.details {
            ItemDetails::Comedy { year } => write!(
                f,
                "{}: {} ({}) Dir: {}",
                label, self.title, year, self.director
            )?,
            ItemDetails::Drama { year } => write!(
                f,
                "{}: {}, {} ({})",
                label, self.director, self.title, year
            )?,
            ItemDetails::Classic {
                performer,
                month,
                year,
            } => write!(
                f,
                "{}: {} {} {} - {} Dir: {}",
                label, month, year, performer, self.title, self.director
            )?,
        }
        write!(f, " Stock: {} Out: {}", self.available(), self.outstanding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::comedy('F', Some(Category::Comedy))]
    #[case::drama('D', Some(Category::Drama))]
    #[case::classic('C', Some(Category::Classic))]
    #[case::unknown('Z', None)]
    #[case::lowercase('f', None)]
    fn test_category_from_tag(#[case] tag: char, #[case] expected: Option<Category>) {
        assert_eq!(Category::from_tag(tag), expected);
    }

    #[test]
    fn test_category_priority() {
        assert!(Category::Comedy < Category::Drama);
        assert!(Category::Drama < Category::Classic);
    }

    #[rstest]
    #[case::comedy(
        CatalogItem::comedy(5, "Woody Allen", "Bananas", 1971),
        "Comedy: Bananas (1971) Dir: Woody Allen Stock: 5 Out: 0"
    )]
    #[case::drama(
        CatalogItem::drama(10, "Barry Levinson", "Good Morning Vietnam", 1988),
        "Drama: Barry Levinson, Good Morning Vietnam (1988) Stock: 10 Out: 0"
    )]
    #[case::classic(
        CatalogItem::classic(10, "George Cukor", "Holiday", "Katherine Hepburn", 9, 1938),
        "Classic: 9 1938 Katherine Hepburn - Holiday Dir: George Cukor Stock: 10 Out: 0"
    )]
    fn test_display(#[case] item: CatalogItem, #[case] expected: &str) {
        assert_eq!(item.to_string(), expected);
    }

    #[test]
    fn test_check_out_stops_at_total() {
        let mut item = CatalogItem::comedy(2, "Woody Allen", "Bananas", 1971);

        assert!(item.check_out());
        assert!(item.check_out());
        assert!(!item.check_out());

        assert_eq!(item.outstanding(), 2);
        assert_eq!(item.available(), 0);
    }

    #[test]
    fn test_check_in_never_goes_negative() {
        let mut item = CatalogItem::comedy(2, "Woody Allen", "Bananas", 1971);

        assert!(!item.check_in());
        assert_eq!(item.outstanding(), 0);

        item.check_out();
        assert!(item.check_in());
        assert_eq!(item.outstanding(), 0);
    }

    #[test]
    fn test_display_reflects_outstanding() {
        let mut item = CatalogItem::drama(3, "Phillippe De Broca", "King of Hearts", 1967);
        item.check_out();

        assert_eq!(
            item.to_string(),
            "Drama: Phillippe De Broca, King of Hearts (1967) Stock: 2 Out: 1"
        );
    }

    #[test]
    fn test_key_orders_comedy_by_title_then_year() {
        let a = CatalogItem::comedy(1, "X", "Annie Hall", 1977);
        let b = CatalogItem::comedy(1, "X", "Annie Hall", 1978);
        let c = CatalogItem::comedy(1, "A", "Bananas", 1971);

        assert!(a.key() < b.key());
        assert!(b.key() < c.key());
    }

    #[test]
    fn test_key_orders_drama_by_director_then_title() {
        let a = CatalogItem::drama(1, "Barry Levinson", "Good Morning Vietnam", 1988);
        let b = CatalogItem::drama(1, "Clint Eastwood", "Unforgiven", 1992);
        let c = CatalogItem::drama(1, "Clint Eastwood", "Mystic River", 2003);

        assert!(a.key() < c.key());
        assert!(c.key() < b.key());
    }

    #[test]
    fn test_key_orders_classic_by_month_year_performer() {
        let a = CatalogItem::classic(1, "D", "T1", "Zed Actor", 2, 1940);
        let b = CatalogItem::classic(1, "D", "T2", "Ann Actor", 2, 1941);
        let c = CatalogItem::classic(1, "D", "T3", "Ann Actor", 3, 1930);
        let d = CatalogItem::classic(1, "D", "T4", "Bob Actor", 3, 1930);

        assert!(a.key() < b.key());
        assert!(b.key() < c.key());
        assert!(c.key() < d.key());
    }

    #[test]
    fn test_key_orders_across_categories() {
        let comedy = CatalogItem::comedy(1, "Z", "Zzz", 2020);
        let drama = CatalogItem::drama(1, "A", "Aaa", 1900);
        let classic = CatalogItem::classic(1, "A", "Aaa", "A A", 1, 1900);

        assert!(comedy.key() < drama.key());
        assert!(drama.key() < classic.key());
    }

    #[test]
    fn test_key_equality_ignores_non_key_fields() {
        let a = CatalogItem::comedy(5, "Woody Allen", "Bananas", 1971);
        let b = CatalogItem::comedy(9, "Someone Else", "Bananas", 1971);
        assert_eq!(a.key(), b.key());

        let c = CatalogItem::drama(5, "Woody Allen", "Bananas", 1971);
        assert_ne!(a.key(), c.key());
    }
}

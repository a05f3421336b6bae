//! Ordered movie catalog
//!
//! The `Catalog` owns every `CatalogItem` in an append-only arena and keeps a
//! separate index of item IDs sorted by `ItemKey`. The arena gives transaction
//! records a stable `ItemId` to point at; the sorted index gives inventory
//! order, uniqueness, and lookup.
//!
//! # Search Text
//!
//! Commands name an item with free text whose shape depends on the category:
//!
//! - Comedy: `"Title, Year"`
//! - Drama: `"Director, Title"` (a trailing comma is tolerated)
//! - Classic: `"Month Year First Last"`
//!
//! Text that cannot be turned into a key simply finds nothing.

use crate::types::{CatalogItem, Category, ItemId, ItemKey};
use std::borrow::Cow;

/// Sorted, duplicate-free collection of catalog items
#[derive(Debug, Default)]
pub struct Catalog {
    /// Arena; an item's position here is its `ItemId`
    items: Vec<CatalogItem>,
    /// Arena indices sorted by item key
    order: Vec<ItemId>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            items: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Add an item unless an equal one is already present
    ///
    /// # Returns
    ///
    /// * `Some(ItemId)` - the new item's ID
    /// * `None` - an item with the same key already exists; the catalog is unchanged
    pub fn insert(&mut self, item: CatalogItem) -> Option<ItemId> {
        let position = match self.position_of(&item.key()) {
            Ok(_) => return None,
            Err(position) => position,
        };

        let id = self.items.len();
        self.items.push(item);
        self.order.insert(position, id);
        Some(id)
    }

    /// Resolve free-text search input to an item of `category`
    ///
    /// The text is trimmed and parsed into the category's key; malformed
    /// text yields `None`.
    pub fn find(&self, category: Category, search: &str) -> Option<ItemId> {
        let key = parse_search_key(category, search)?;
        self.find_by_key(&key)
    }

    /// Exact lookup by ordering key
    pub fn find_by_key(&self, key: &ItemKey<'_>) -> Option<ItemId> {
        self.position_of(key).ok().map(|position| self.order[position])
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut CatalogItem> {
        self.items.get_mut(id)
    }

    /// Items in inventory order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.order.iter().map(move |&id| &self.items[id])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position_of(&self, key: &ItemKey<'_>) -> Result<usize, usize> {
        self.order
            .binary_search_by(|&id| self.items[id].key().cmp(key))
    }
}

/// Build the lookup key for `category` from command search text
pub fn parse_search_key<'a>(category: Category, search: &'a str) -> Option<ItemKey<'a>> {
    let search = search.trim();

    match category {
        Category::Comedy => {
            let mut parts = search.split(',');
            let title = parts.next()?.trim();
            let year = parts.next()?.trim().parse().ok()?;
            Some(ItemKey::Comedy {
                title: Cow::Borrowed(title),
                year,
            })
        }
        Category::Drama => {
            let mut parts = search.split(',');
            let director = parts.next()?.trim();
            let title = parts.next()?.trim();
            Some(ItemKey::Drama {
                director: Cow::Borrowed(director),
                title: Cow::Borrowed(title),
            })
        }
        Category::Classic => {
            let mut tokens = search.split_whitespace();
            let month = tokens.next()?.parse().ok()?;
            let year = tokens.next()?.parse().ok()?;
            let first = tokens.next()?;
            let last = tokens.next()?;
            Some(ItemKey::Classic {
                month,
                year,
                performer: Cow::Owned(format!("{} {}", first, last)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_items() -> Vec<CatalogItem> {
        vec![
            CatalogItem::classic(10, "George Cukor", "Holiday", "Katherine Hepburn", 9, 1938),
            CatalogItem::drama(10, "Steven Spielberg", "Schindler's List", 1993),
            CatalogItem::comedy(10, "Nora Ephron", "You've Got Mail", 1998),
            CatalogItem::classic(10, "George Cukor", "Holiday", "Cary Grant", 9, 1938),
            CatalogItem::comedy(5, "Woody Allen", "Bananas", 1971),
            CatalogItem::drama(10, "Barry Levinson", "Good Morning Vietnam", 1988),
            CatalogItem::classic(10, "Victor Fleming", "The Wizard of Oz", "Judy Garland", 7, 1939),
        ]
    }

    fn titles(catalog: &Catalog) -> Vec<String> {
        catalog.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_iteration_follows_total_order() {
        let mut catalog = Catalog::new();
        for item in sample_items() {
            assert!(catalog.insert(item).is_some());
        }

        let listed: Vec<(Category, &str)> = catalog
            .iter()
            .map(|item| (item.category(), item.title()))
            .collect();

        assert_eq!(
            listed,
            vec![
                (Category::Comedy, "Bananas"),
                (Category::Comedy, "You've Got Mail"),
                (Category::Drama, "Good Morning Vietnam"),
                (Category::Drama, "Schindler's List"),
                (Category::Classic, "The Wizard of Oz"),
                (Category::Classic, "Holiday"),
                (Category::Classic, "Holiday"),
            ]
        );
        let classics: Vec<_> = catalog
            .iter()
            .filter_map(|item| match item.key() {
                ItemKey::Classic { performer, .. } => Some(performer.into_owned()),
                _ => None,
            })
            .collect();
        assert_eq!(classics, vec!["Judy Garland", "Cary Grant", "Katherine Hepburn"]);
    }

    #[test]
    fn test_iteration_independent_of_insertion_order() {
        let mut forward = Catalog::new();
        let mut backward = Catalog::new();
        for item in sample_items() {
            forward.insert(item);
        }
        for item in sample_items().into_iter().rev() {
            backward.insert(item);
        }

        assert_eq!(titles(&forward), titles(&backward));
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut catalog = Catalog::new();
        let first = catalog.insert(CatalogItem::comedy(5, "Woody Allen", "Bananas", 1971));
        let second = catalog.insert(CatalogItem::comedy(9, "Other Person", "Bananas", 1971));

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(first.unwrap()).unwrap().total(), 5);
    }

    #[test]
    fn test_same_fields_in_different_categories_are_distinct() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(CatalogItem::comedy(1, "A B", "Title", 2000)).is_some());
        assert!(catalog.insert(CatalogItem::drama(1, "A B", "Title", 2000)).is_some());
        assert_eq!(catalog.len(), 2);
    }

    #[rstest]
    #[case::comedy(Category::Comedy, "You've Got Mail, 1998", Some("You've Got Mail"))]
    #[case::comedy_padded(Category::Comedy, "  Bananas ,  1971  ", Some("Bananas"))]
    #[case::comedy_wrong_year(Category::Comedy, "Bananas, 1972", None)]
    #[case::comedy_missing_year(Category::Comedy, "Bananas", None)]
    #[case::comedy_bad_year(Category::Comedy, "Bananas, soon", None)]
    #[case::drama(Category::Drama, "Steven Spielberg, Schindler's List,", Some("Schindler's List"))]
    #[case::drama_no_trailing_comma(Category::Drama, "Barry Levinson, Good Morning Vietnam", Some("Good Morning Vietnam"))]
    #[case::drama_missing_title(Category::Drama, "Barry Levinson", None)]
    #[case::classic(Category::Classic, "9 1938 Cary Grant", Some("Holiday"))]
    #[case::classic_other_performer(Category::Classic, "7 1939 Judy Garland", Some("The Wizard of Oz"))]
    #[case::classic_missing_last_name(Category::Classic, "9 1938 Cary", None)]
    #[case::classic_bad_month(Category::Classic, "Sep 1938 Cary Grant", None)]
    #[case::wrong_category(Category::Drama, "Bananas, 1971", None)]
    #[case::empty(Category::Comedy, "", None)]
    fn test_find(#[case] category: Category, #[case] search: &str, #[case] expected: Option<&str>) {
        let mut catalog = Catalog::new();
        for item in sample_items() {
            catalog.insert(item);
        }

        let found = catalog
            .find(category, search)
            .and_then(|id| catalog.get(id))
            .map(|item| item.title());

        assert_eq!(found, expected);
        if let Some(id) = catalog.find(category, search) {
            assert_eq!(catalog.get(id).unwrap().category(), category);
        }
    }

    #[test]
    fn test_ids_stay_valid_after_later_inserts() {
        let mut catalog = Catalog::new();
        let bananas = catalog
            .insert(CatalogItem::comedy(5, "Woody Allen", "Bananas", 1971))
            .unwrap();
        catalog.insert(CatalogItem::comedy(1, "Mel Brooks", "Airplane", 1980));
        catalog.insert(CatalogItem::comedy(1, "Mel Brooks", "Annie Hall", 1977));

        assert_eq!(catalog.get(bananas).unwrap().title(), "Bananas");
        assert_eq!(catalog.find(Category::Comedy, "Bananas, 1971"), Some(bananas));
    }

    #[test]
    fn test_get_mut_changes_are_visible_in_iteration() {
        let mut catalog = Catalog::new();
        let id = catalog
            .insert(CatalogItem::comedy(5, "Woody Allen", "Bananas", 1971))
            .unwrap();

        catalog.get_mut(id).unwrap().check_out();

        let item = catalog.iter().next().unwrap();
        assert_eq!(item.outstanding(), 1);
    }
}

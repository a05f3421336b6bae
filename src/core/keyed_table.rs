//! Fixed-size chained hash table
//!
//! `KeyedTable` maps keys to values using a constant number of buckets, each
//! holding a chain of entries. The table never resizes and never removes
//! entries; the store only needs insert and lookup for account resolution.

/// Number of buckets in every table
pub const BUCKET_COUNT: usize = 101;

/// Keys that can be placed in a `KeyedTable`
///
/// Implementations must be deterministic: equal keys always land in the same
/// bucket.
pub trait TableKey: Eq {
    /// Bucket index in `0..buckets`
    fn bucket(&self, buckets: usize) -> usize;
}

macro_rules! impl_table_key_for_unsigned {
    ($($t:ty),*) => {
        $(
            impl TableKey for $t {
                fn bucket(&self, buckets: usize) -> usize {
                    (*self as u64 % buckets as u64) as usize
                }
            }
        )*
    };
}

impl_table_key_for_unsigned!(u8, u16, u32, u64, usize);

impl TableKey for i32 {
    fn bucket(&self, buckets: usize) -> usize {
        self.rem_euclid(buckets as i32) as usize
    }
}

impl TableKey for i64 {
    fn bucket(&self, buckets: usize) -> usize {
        self.rem_euclid(buckets as i64) as usize
    }
}

// Polynomial accumulation: hash = (hash * 31 + byte) mod buckets
impl TableKey for str {
    fn bucket(&self, buckets: usize) -> usize {
        self.bytes()
            .fold(0usize, |hash, byte| (hash * 31 + byte as usize) % buckets)
    }
}

impl TableKey for String {
    fn bucket(&self, buckets: usize) -> usize {
        self.as_str().bucket(buckets)
    }
}

/// Chained hash table with a fixed bucket array
#[derive(Debug, Clone)]
pub struct KeyedTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: TableKey, V> KeyedTable<K, V> {
    /// Create an empty table with `BUCKET_COUNT` buckets
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(BUCKET_COUNT);
        buckets.resize_with(BUCKET_COUNT, Vec::new);
        KeyedTable { buckets, len: 0 }
    }

    /// Insert a value, replacing the value already stored under `key`
    ///
    /// # Returns
    ///
    /// The previous value if the key was already present
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let chain = &mut self.buckets[key.bucket(BUCKET_COUNT)];

        if let Some(entry) = chain.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut entry.1, value));
        }

        chain.push((key, value));
        self.len += 1;
        None
    }

    /// Look up the value stored under `key`
    pub fn find(&self, key: &K) -> Option<&V> {
        self.buckets[key.bucket(BUCKET_COUNT)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up the value stored under `key` for modification
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        self.buckets[key.bucket(BUCKET_COUNT)]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Number of distinct keys stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K: TableKey, V> Default for KeyedTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_insert_and_find() {
        let mut table = KeyedTable::new();
        table.insert(1000u32, "Mouse");
        table.insert(8000u32, "Wacky");

        assert_eq!(table.find(&1000), Some(&"Mouse"));
        assert_eq!(table.find(&8000), Some(&"Wacky"));
        assert_eq!(table.find(&1), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_existing_key_overwrites() {
        let mut table = KeyedTable::new();
        assert_eq!(table.insert(7u32, 1), None);
        assert_eq!(table.insert(7u32, 2), Some(1));

        assert_eq!(table.find(&7), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_colliding_keys_share_a_chain() {
        let mut table = KeyedTable::new();
        let first = 5u32;
        let second = 5 + BUCKET_COUNT as u32;
        let third = 5 + 2 * BUCKET_COUNT as u32;
        assert_eq!(first.bucket(BUCKET_COUNT), second.bucket(BUCKET_COUNT));

        table.insert(first, 'a');
        table.insert(second, 'b');
        table.insert(third, 'c');
        table.insert(second, 'B');

        assert_eq!(table.find(&first), Some(&'a'));
        assert_eq!(table.find(&second), Some(&'B'));
        assert_eq!(table.find(&third), Some(&'c'));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut table = KeyedTable::new();
        table.insert(3u32, vec![1]);

        table.find_mut(&3).unwrap().push(2);

        assert_eq!(table.find(&3), Some(&vec![1, 2]));
        assert!(table.find_mut(&4).is_none());
    }

    #[test]
    fn test_contains_key() {
        let mut table: KeyedTable<u32, ()> = KeyedTable::default();
        assert!(table.is_empty());

        table.insert(42, ());
        assert!(table.contains_key(&42));
        assert!(!table.contains_key(&43));
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::below(100, 100)]
    #[case::wraps(101, 0)]
    #[case::account(1000, 91)]
    fn test_integer_bucket_is_modulo(#[case] key: u32, #[case] expected: usize) {
        assert_eq!(key.bucket(BUCKET_COUNT), expected);
    }

    #[test]
    fn test_negative_integer_bucket_in_range() {
        assert_eq!((-1i32).bucket(BUCKET_COUNT), 100);
    }

    #[rstest]
    #[case::empty("", 0)]
    #[case::single("a", 97)]
    #[case::two("ab", (97 * 31 + 98) % 101)]
    fn test_string_bucket_is_polynomial(#[case] key: &str, #[case] expected: usize) {
        assert_eq!(key.bucket(BUCKET_COUNT), expected);
        assert_eq!(key.to_string().bucket(BUCKET_COUNT), expected);
    }

    #[test]
    fn test_string_keys() {
        let mut table = KeyedTable::new();
        table.insert("Minnie".to_string(), 1);
        table.insert("Mickey".to_string(), 2);

        assert_eq!(table.find(&"Minnie".to_string()), Some(&1));
        assert_eq!(table.find(&"Goofy".to_string()), None);
    }
}

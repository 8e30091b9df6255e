//! Insertion-ordered collections.
//!
//! A thin wrapper around `indexmap::IndexMap`. Anything whose iteration order
//! is observable in generated output goes through [`OrderedMap`].

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

/// Map that iterates in first-insertion order.
#[derive(Clone)]
pub struct OrderedMap<K, V>(IndexMap<K, V>);

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.contains_key(key)
    }

    /// Gets the value stored for a key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns the insertion position of a key.
    #[must_use]
    pub fn position(&self, key: &K) -> Option<usize> {
        self.0.get_index_of(key)
    }

    /// Inserts a value if the key is new.
    ///
    /// Returns the already stored value when the key exists; the map is left
    /// untouched in that case and the key keeps its first position.
    pub fn insert_new(&mut self, key: K, value: V) -> Option<&V> {
        match self.0.entry(key) {
            Entry::Occupied(entry) => Some(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Returns an iterator over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter()
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.keys()
    }

    /// Consumes the map, returning entries in insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.0.into_iter().collect()
    }
}

impl<K: Eq + Hash, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert_new(k, v);
        }
        map
    }
}

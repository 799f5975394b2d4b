//! Ordered deduplicating set keyed by a derived key

use ahash::AHashSet;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;
use std::hash::Hash;

/// Ordered collection of values, unique by a key derived from each value.
///
/// `values` keeps insertion order and `index` holds the key of every stored
/// value, nothing more. The first value seen for a key wins; later values
/// with the same key are dropped without replacing it.
///
/// The key function must map the same logical value to the same key for the
/// lifetime of the set.
#[derive(Debug, Clone)]
pub struct Set<K, T> {
    values: Vec<T>,
    index: AHashSet<K>,
}

/// Identity key function for identity-keyed sets
#[inline]
pub fn identity_key<T: Clone>(item: &T) -> T {
    item.clone()
}

impl<T> Set<T, T>
where
    T: Eq + Hash + Clone,
{
    /// Build an identity-keyed set from `items`, keeping first occurrences
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_key_fn(items, identity_key)
    }
}

impl<K, T> Set<K, T>
where
    K: Eq + Hash,
{
    /// Create an empty set
    pub fn empty() -> Self {
        Self {
            values: Vec::new(),
            index: AHashSet::new(),
        }
    }

    /// Build a set from `items`, deduplicating by `key_fn`
    pub fn with_key_fn<I, F>(items: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        let mut set = Self {
            values: Vec::with_capacity(lower),
            index: AHashSet::with_capacity(lower),
        };
        set.add_all(items, key_fn);
        set
    }

    /// Check whether a value with this key is stored
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(key)
    }

    /// Add `item` unless its key is already present.
    ///
    /// Returns `true` if the item was stored. An existing value is never
    /// replaced, even when `item` differs from it in other fields.
    pub fn add_with_key_fn<F>(&mut self, item: T, key_fn: F) -> bool
    where
        F: FnOnce(&T) -> K,
    {
        let key = key_fn(&item);
        if self.index.insert(key) {
            self.values.push(item);
            true
        } else {
            false
        }
    }

    /// Add every item in order, as repeated `add_with_key_fn` calls
    pub fn add_all<I, F>(&mut self, items: I, mut key_fn: F)
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        for item in items {
            self.add_with_key_fn(item, &mut key_fn);
        }
    }

    /// Stored values in insertion order
    #[inline]
    pub fn to_list(&self) -> &[T] {
        &self.values
    }

    /// Consume the set, returning its values in insertion order
    pub fn into_list(self) -> Vec<T> {
        self.values
    }

    /// Iterate over the stored values in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, T> Default for Set<K, T>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for Set<T, T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, K, T> IntoIterator for &'a Set<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K, T> IntoIterator for Set<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K, T> Serialize for Set<K, T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Set<T, T>
where
    T: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::new(items))
    }
}

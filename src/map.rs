//! Ordered map type for journal event objects.
//!
//! [`EventMap`] wraps [`IndexMap`] so that object fields keep the order they had
//! in the source document. Journal readers rely on `event` and `timestamp` coming
//! first in re-emitted lines, and insertion order makes serialization output
//! deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use journal_json::{EventMap, JournalValue};
//!
//! let mut map = EventMap::new();
//! map.insert("event".to_string(), JournalValue::from("FSDJump"));
//! map.insert("StarSystem".to_string(), JournalValue::from("Sol"));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["event", "StarSystem"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;
use std::ops::Index;

/// An ordered map of string keys to journal values.
///
/// A thin wrapper around [`IndexMap`] preserving insertion order, so a parsed
/// event serializes with its fields in the original order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventMap(IndexMap<String, crate::JournalValue>);

impl EventMap {
    /// Creates an empty `EventMap`.
    #[must_use]
    pub fn new() -> Self {
        EventMap(IndexMap::new())
    }

    /// Creates an empty `EventMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EventMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::JournalValue) -> Option<crate::JournalValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::JournalValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::JournalValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::JournalValue> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::JournalValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::JournalValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::JournalValue> {
        self.0.iter()
    }
}

impl Index<&str> for EventMap {
    type Output = crate::JournalValue;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &str) -> &crate::JournalValue {
        self.0.index(key)
    }
}

impl From<HashMap<String, crate::JournalValue>> for EventMap {
    fn from(map: HashMap<String, crate::JournalValue>) -> Self {
        EventMap(map.into_iter().collect())
    }
}

impl From<EventMap> for HashMap<String, crate::JournalValue> {
    fn from(map: EventMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for EventMap {
    type Item = (String, crate::JournalValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::JournalValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventMap {
    type Item = (&'a String, &'a crate::JournalValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::JournalValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::JournalValue)> for EventMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::JournalValue)>>(iter: T) -> Self {
        EventMap(IndexMap::from_iter(iter))
    }
}

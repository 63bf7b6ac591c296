//! Object storage for RJSON values.
//!
//! [`ObjectMap`] wraps an [`IndexMap`] so iteration is stable (insertion order)
//! while serialization always emits keys in sorted byte order. The sort happens
//! lazily, once per object, when the encoder first visits it.
//!
//! Every mutation path keeps the map free of [`Value::Void`]: setting a key to
//! Void removes it, collecting from an iterator drops Void entries, and a Void
//! written through [`ObjectMap::get_mut`] removes the entry when the handle is
//! dropped.
//!
//! ## Examples
//!
//! ```rust
//! use serde_rjson::{ObjectMap, Value};
//!
//! let mut map = ObjectMap::new();
//! map.set("name", Value::from("Alice"));
//! map.set("age", Value::from(30));
//! map.set("name", Value::Void);
//!
//! assert_eq!(map.len(), 1);
//! assert!(map.get("name").is_none());
//! assert_eq!(map.sorted_keys(), vec!["age"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::ops::{Deref, DerefMut};

/// A string-keyed map of RJSON values that never holds a Void entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMap(IndexMap<String, Value>);

impl ObjectMap {
    #[must_use]
    pub fn new() -> Self {
        ObjectMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts or overwrites `key`. A Void `value` removes the key instead.
    ///
    /// Returns the previous value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::{ObjectMap, Value};
    ///
    /// let mut map = ObjectMap::new();
    /// assert!(map.set("key", Value::from(1)).is_none());
    /// assert_eq!(map.set("key", Value::Void), Some(Value::from(1)));
    /// assert!(map.is_empty());
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if value.is_void() {
            self.0.shift_remove(&key)
        } else {
            self.0.insert(key, value)
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Mutable access to a stored value, for editing nested containers in place.
    ///
    /// If the value is Void when the returned handle is dropped, the entry is
    /// removed, exactly as [`ObjectMap::set`] with Void would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::{ObjectMap, Value};
    ///
    /// let mut map = ObjectMap::new();
    /// map.set("n", Value::from(1));
    /// if let Some(mut entry) = map.get_mut("n") {
    ///     *entry = Value::Void;
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<EntryMut<'_>> {
        let index = self.0.get_index_of(key)?;
        Some(EntryMut {
            entries: &mut self.0,
            index,
        })
    }

    /// Removes `key`, returning its value. Absent keys are not an error.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in lexicographic byte order, the order RJSON output uses.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

/// A mutable handle to one [`ObjectMap`] entry, returned by [`ObjectMap::get_mut`].
///
/// Dereferences to the stored [`Value`]. Dropping the handle while it holds
/// Void removes the entry.
pub struct EntryMut<'a> {
    entries: &'a mut IndexMap<String, Value>,
    index: usize,
}

impl Deref for EntryMut<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.entries[self.index]
    }
}

impl DerefMut for EntryMut<'_> {
    fn deref_mut(&mut self) -> &mut Value {
        &mut self.entries[self.index]
    }
}

impl Drop for EntryMut<'_> {
    fn drop(&mut self) {
        if self.entries[self.index].is_void() {
            self.entries.shift_remove_index(self.index);
        }
    }
}

impl From<HashMap<String, Value>> for ObjectMap {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, Value>> for ObjectMap {
    fn from(map: BTreeMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<ObjectMap> for HashMap<String, Value> {
    fn from(map: ObjectMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut map = ObjectMap::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

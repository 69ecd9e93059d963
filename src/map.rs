//! Ordered mapping type with scalar keys.
//!
//! [`ValueMap`] wraps [`IndexMap`] so that, with key sorting off, a mapping
//! renders its entries in insertion order: deterministic per run, without
//! the iteration-order lottery of `HashMap`.
//!
//! Keys are scalars ([`Key`]): booleans, integers, or strings. [`Key`]
//! carries the natural ordering the ascending/descending sort modes use:
//! booleans first, then signed and unsigned integers compared numerically
//! as one class, then strings lexicographically.
//!
//! ## Examples
//!
//! ```rust
//! use prettify::{Value, ValueMap};
//!
//! let mut map = ValueMap::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert("age", Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! let keys: Vec<_> = map.keys().map(|k| k.to_string()).collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt;

/// A scalar mapping key.
///
/// Keys render through the same scalar writers as values, so a string key
/// appears quoted while an integer key appears bare.
///
/// # Examples
///
/// ```rust
/// use prettify::Key;
///
/// let mut keys = vec![Key::from("b"), Key::from(10), Key::from(2), Key::from(false)];
/// keys.sort();
/// assert_eq!(
///     keys,
///     vec![Key::from(false), Key::from(2), Key::from(10), Key::from("b")]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Str(String),
}

impl Key {
    /// Rank of the key's class in the natural ordering.
    fn class(&self) -> u8 {
        match self {
            Key::Bool(_) => 0,
            Key::Int(_) | Key::UInt(_) => 1,
            Key::Str(_) => 2,
        }
    }

    /// Numeric value as `i128`, which holds both `i64` and `u64` ranges.
    fn numeric(&self) -> Option<i128> {
        match self {
            Key::Int(i) => Some(*i as i128),
            Key::UInt(u) => Some(*u as i128),
            _ => None,
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.class().cmp(&other.class()) {
            Ordering::Equal => match (self, other) {
                (Key::Bool(a), Key::Bool(b)) => a.cmp(b),
                (Key::Str(a), Key::Str(b)) => a.cmp(b),
                _ => match (self.numeric(), other.numeric()) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    _ => Ordering::Equal,
                },
            },
            ord => ord,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(i) => write!(f, "{}", i),
            Key::UInt(u) => write!(f, "{}", u),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::UInt(value as u64)
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::UInt(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

/// An insertion-ordered map of scalar keys to values.
///
/// # Examples
///
/// ```rust
/// use prettify::{Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert(1, Value::from("one"));
/// map.insert(2, Value::from(2));
///
/// assert_eq!(map.get(&prettify::Key::from(1)).and_then(|v| v.as_str()), Some("one"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(IndexMap<Key, Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key
    /// if any. Insertion order of new keys is preserved.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl IntoIterator for ValueMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ValueMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut map = ValueMap::new();
        map.insert("z", 1);
        map.insert("a", 2);
        map.insert("m", 3);

        let keys: Vec<_> = map.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_insert_replaces_value_not_position() {
        let mut map = ValueMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 10), Some(Value::Int(1)));

        let keys: Vec<_> = map.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_key_ordering_within_class() {
        assert!(Key::from(false) < Key::from(true));
        assert!(Key::from(-3) < Key::from(2));
        assert!(Key::from("abc") < Key::from("abd"));
    }

    #[test]
    fn test_key_ordering_mixes_int_and_uint_numerically() {
        assert!(Key::from(-1i64) < Key::from(0u64));
        assert!(Key::from(5u64) < Key::from(6i64));
        assert_eq!(Key::from(7i64).cmp(&Key::from(7u64)), Ordering::Equal);
        // u64 values above i64::MAX still compare correctly
        assert!(Key::from(i64::MAX) < Key::from(u64::MAX));
    }

    #[test]
    fn test_key_ordering_across_classes() {
        assert!(Key::from(true) < Key::from(0));
        assert!(Key::from(999) < Key::from(""));
    }
}

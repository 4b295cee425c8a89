//! # Canonical Mapping — Frozen Dictionaries and Their Builders
//!
//! Every registry in the engine (syntax checkers, digesters, validator
//! factories, format attributes, message templates) is a [`Dictionary`].
//!
//! ## Lifecycle
//!
//! ```text
//! DictionaryBuilder ──freeze()──▶ Dictionary ──thaw()──▶ DictionaryBuilder
//!        ▲   │                                                 (fresh copy)
//!        └───┘ add_entry / remove_entry
//! ```
//!
//! Freezing copies the staged entries. A frozen dictionary is never mutated
//! afterwards, so it can be read from any number of threads without
//! synchronisation. Thawing likewise copies, so a builder obtained from a
//! dictionary shares no mutable state with it.
//!
//! Entries iterate in ascending name order.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Immutable name→value mapping.
///
/// Cloning is cheap: clones share the same frozen entry table.
pub struct Dictionary<V> {
    entries: Arc<BTreeMap<String, V>>,
}

impl<V> Dictionary<V> {
    /// Start an empty builder.
    pub fn builder() -> DictionaryBuilder<V> {
        DictionaryBuilder::new()
    }

    /// Look up an entry. Absent names yield `None`, never an error.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Whether an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Clone> Dictionary<V> {
    /// Copy the entries into a fresh builder.
    pub fn thaw(&self) -> DictionaryBuilder<V> {
        DictionaryBuilder {
            entries: self.entries.as_ref().clone(),
        }
    }
}

impl<V> Clone for Dictionary<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<V> Default for Dictionary<V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(BTreeMap::new()),
        }
    }
}

impl<V> fmt::Debug for Dictionary<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Mutable staging area for a [`Dictionary`].
///
/// Every operation is permissive: adding overwrites, removing an absent
/// name does nothing. Whether a name is meaningful is the caller's concern.
pub struct DictionaryBuilder<V> {
    entries: BTreeMap<String, V>,
}

impl<V> DictionaryBuilder<V> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace an entry.
    pub fn add_entry(&mut self, name: impl Into<String>, value: V) -> &mut Self {
        self.entries.insert(name.into(), value);
        self
    }

    /// Remove an entry if present.
    pub fn remove_entry(&mut self, name: &str) -> &mut Self {
        self.entries.remove(name);
        self
    }

    /// Whether a staged entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of staged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> DictionaryBuilder<V> {
    /// Insert or replace every entry of `other`.
    pub fn add_all(&mut self, other: &Dictionary<V>) -> &mut Self {
        for (name, value) in other.iter() {
            self.entries.insert(name.to_string(), value.clone());
        }
        self
    }

    /// Snapshot the staged entries.
    ///
    /// The builder is left untouched and remains usable; later mutations
    /// are not visible through the returned dictionary.
    pub fn freeze(&self) -> Dictionary<V> {
        Dictionary {
            entries: Arc::new(self.entries.clone()),
        }
    }
}

impl<V> Default for DictionaryBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for DictionaryBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_name_is_none() {
        let dict: Dictionary<u32> = Dictionary::default();
        assert!(dict.get("missing").is_none());
        assert!(!dict.contains("missing"));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_add_entry_last_write_wins() {
        let mut builder = Dictionary::builder();
        builder.add_entry("a", 1).add_entry("a", 2);
        let dict = builder.freeze();
        assert_eq!(dict.get("a"), Some(&2));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut builder: DictionaryBuilder<u32> = DictionaryBuilder::new();
        builder.remove_entry("nothing");
        assert!(builder.is_empty());
    }

    #[test]
    fn test_freeze_is_copy_not_view() {
        let mut builder = DictionaryBuilder::new();
        builder.add_entry("a", 1);
        let first = builder.freeze();
        builder.add_entry("b", 2).remove_entry("a");
        let second = builder.freeze();

        assert_eq!(first.get("a"), Some(&1));
        assert!(first.get("b").is_none());
        assert!(second.get("a").is_none());
        assert_eq!(second.get("b"), Some(&2));
    }

    #[test]
    fn test_thaw_does_not_leak_into_source() {
        let mut builder = DictionaryBuilder::new();
        builder.add_entry("a", 1);
        let dict = builder.freeze();

        let mut thawed = dict.thaw();
        thawed.add_entry("a", 10).add_entry("z", 26);

        assert_eq!(dict.get("a"), Some(&1));
        assert!(!dict.contains("z"));
        assert_eq!(thawed.freeze().get("a"), Some(&10));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut builder = DictionaryBuilder::new();
        builder.add_entry("zeta", 3).add_entry("alpha", 1).add_entry("mu", 2);
        let dict = builder.freeze();
        let names: Vec<&str> = dict.names().collect();
        assert_eq!(names, vec!["alpha", "mu", "zeta"]);
        let values: Vec<u32> = dict.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_all_overwrites() {
        let mut base = DictionaryBuilder::new();
        base.add_entry("a", 1).add_entry("b", 2);
        let other = {
            let mut b = DictionaryBuilder::new();
            b.add_entry("b", 20).add_entry("c", 30);
            b.freeze()
        };
        base.add_all(&other);
        let dict = base.freeze();
        assert_eq!(dict.get("a"), Some(&1));
        assert_eq!(dict.get("b"), Some(&20));
        assert_eq!(dict.get("c"), Some(&30));
    }

    #[test]
    fn test_frozen_dictionary_is_shareable_across_threads() {
        let mut builder = DictionaryBuilder::new();
        builder.add_entry("shared", 7u64);
        let dict = builder.freeze();
        std::thread::scope(|s| {
            for _ in 0..4 {
                let d = dict.clone();
                s.spawn(move || assert_eq!(d.get("shared"), Some(&7)));
            }
        });
    }
}

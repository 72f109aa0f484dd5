use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory key-value properties store
///
/// Local entries always shadow the optional defaults store. Lookups walk the
/// whole defaults chain, while `put` and `remove` only ever touch the local
/// entries. The chain is fixed at construction, so it cannot contain a cycle.
///
/// Entries sit behind a `RwLock`, which lets a defaults store be shared
/// through an `Arc` and still be updated by whoever holds it. Each operation
/// locks one level of the chain at a time.
#[derive(Debug)]
pub struct Properties {
    data: RwLock<HashMap<String, String>>,
    defaults: Option<Arc<Properties>>,
}

impl Properties {
    /// Create a new empty store without defaults
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            defaults: None,
        }
    }

    /// Create a new empty store that falls back to `defaults` on a miss
    pub fn with_defaults(defaults: Arc<Properties>) -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            defaults: Some(defaults),
        }
    }

    /// The defaults store consulted when a key is missing locally
    pub fn defaults(&self) -> Option<&Arc<Properties>> {
        self.defaults.as_ref()
    }

    // Entries are plain strings, so a poisoned lock still holds a usable map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set `key` to `value` in the local entries, replacing any previous value
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write().insert(key.into(), value.into());
    }

    /// Get the effective value for `key`, falling back through the defaults chain
    pub fn get(&self, key: &str) -> Option<String> {
        let local = self.read().get(key).cloned();
        match local {
            Some(value) => Some(value),
            None => self.defaults.as_ref().and_then(|d| d.get(key)),
        }
    }

    /// Get the effective value for `key`, or `fallback` if no level has it
    pub fn get_or_default(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Whether `key` resolves anywhere in the chain
    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
            || self.defaults.as_ref().is_some_and(|d| d.contains_key(key))
    }

    /// Remove `key` from the local entries, returning the removed local value
    ///
    /// The defaults chain is left untouched, so a later `get` may still find
    /// the key there.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.write().remove(key)
    }

    /// All keys reachable through the local entries and the defaults chain
    pub fn keys(&self) -> HashSet<String> {
        let mut keys = HashSet::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys(&self, keys: &mut HashSet<String>) {
        if let Some(defaults) = &self.defaults {
            defaults.collect_keys(keys);
        }
        keys.extend(self.read().keys().cloned());
    }

    /// Build a standalone store from every key accepted by `predicate`
    ///
    /// The predicate sees keys, not values. Each kept key maps to its
    /// effective value at the time of the call, and the result has no
    /// defaults, so later changes to this chain do not reach it.
    pub fn filter<F>(&self, predicate: F) -> Properties
    where
        F: Fn(&str) -> bool,
    {
        let filtered = Properties::new();
        for key in self.keys() {
            if !predicate(&key) {
                continue;
            }
            if let Some(value) = self.get(&key) {
                filtered.put(key, value);
            }
        }
        filtered
    }

    /// Standalone snapshot of every key starting with `prefix`
    pub fn filter_has_prefix(&self, prefix: &str) -> Properties {
        self.filter(|key| key.starts_with(prefix))
    }

    /// Number of local entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if there are no local entries
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Local entries sorted by key
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let data = self.data.get_mut().unwrap_or_else(PoisonError::into_inner);
        data.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        properties.extend(iter);
        properties
    }
}

//! Utility types for validation.

use std::collections::HashMap;

/// A map keyed case-insensitively that keeps the first value inserted per key.
///
/// Used for learner reference lookups, which the ILR treats case-insensitively.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveMap<V> {
    /// Maps uppercase key -> value
    inner: HashMap<String, V>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unless the key is already present.
    ///
    /// Returns `false` when an earlier value was kept.
    pub fn insert_first(&mut self, key: impl AsRef<str>, value: V) -> bool {
        let key = normalize(key.as_ref());
        if self.inner.contains_key(&key) {
            return false;
        }
        self.inner.insert(key, value);
        true
    }

    /// Look up a value (case-insensitive, surrounding whitespace ignored).
    pub fn get(&self, key: impl AsRef<str>) -> Option<&V> {
        self.inner.get(&normalize(key.as_ref()))
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Case-insensitive code comparison with surrounding whitespace ignored.
pub fn code_eq(left: &str, right: &str) -> bool {
    left.trim().eq_ignore_ascii_case(right.trim())
}

//! Generic time-series container.
//!
//! `TimeSeries<K, V>` is an ordered map from a key (usually a `Date`) to a
//! value.  Daily indicator columns are stored as `TimeSeries<Date, u8>`.

use std::collections::BTreeMap;

/// A generic time-indexed container backed by a `BTreeMap`.
///
/// Missing keys simply return `None`; there is no null sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeries<K: Ord + Clone, V: Clone> {
    data: BTreeMap<K, V>,
}

impl<K: Ord + Clone, V: Clone> Default for TimeSeries<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> std::iter::FromIterator<(K, V)> for TimeSeries<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> TimeSeries<K, V> {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Create an empty time series.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Build a series holding `value` at every key of `keys`.
    pub fn filled(keys: impl IntoIterator<Item = K>, value: V) -> Self {
        keys.into_iter().map(|k| (k, value.clone())).collect()
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The earliest key, or `None` if empty.
    pub fn first_key(&self) -> Option<&K> {
        self.data.keys().next()
    }

    /// The latest key, or `None` if empty.
    pub fn last_key(&self) -> Option<&K> {
        self.data.keys().next_back()
    }

    // ── Element access ───────────────────────────────────────────────────

    /// Look up a value by key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.data.get_mut(key)
    }

    // ── Bulk access ──────────────────────────────────────────────────────

    /// All values in key-ascending order.
    pub fn values(&self) -> Vec<V> {
        self.data.values().cloned().collect()
    }

    /// Iterate over `(&K, &V)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.data.iter()
    }

    /// Iterate over the entries whose key lies in `range`, in ascending order.
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = (&K, &V)>
    where
        R: std::ops::RangeBounds<K>,
    {
        self.data.range(range)
    }

}

// ── Tests ─────────────────────────────────────────────────────────────────────

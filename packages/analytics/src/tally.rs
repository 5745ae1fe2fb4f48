//! Single-pass frequency counting.
//!
//! Tie-break rules:
//! - [`Tally::mode`] returns the smallest key (by `Ord`) among those with
//!   the highest count.
//! - [`Tally::ranked`] orders by descending count, then by the order in
//!   which keys were first added.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u64,
    first_seen: usize,
}

/// Frequency counts keyed by value.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: BTreeMap<K, Entry>,
}

impl<K: Ord> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Tally<K> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Counts one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        let first_seen = self.entries.len();
        self.entries
            .entry(key)
            .or_insert(Entry {
                count: 0,
                first_seen,
            })
            .count += 1;
    }

    /// Whether nothing has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most frequent key and its count; the smallest key wins a tie.
    #[must_use]
    pub fn mode(&self) -> Option<(&K, u64)> {
        let mut best: Option<(&K, u64)> = None;
        for (key, entry) in &self.entries {
            if best.is_none_or(|(_, count)| entry.count > count) {
                best = Some((key, entry.count));
            }
        }
        best
    }

    /// Smallest key counted.
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        self.entries.keys().next()
    }

    /// Largest key counted.
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        self.entries.keys().next_back()
    }

    /// All keys by descending count, ties in first-seen order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&K, u64)> {
        let mut ranked: Vec<(&K, Entry)> = self.entries.iter().map(|(k, e)| (k, *e)).collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked.into_iter().map(|(k, e)| (k, e.count)).collect()
    }
}

impl<K: Ord> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

//! Value counting with a deterministic mode.

use std::collections::HashMap;
use std::hash::Hash;

/// A value together with how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopValue<T> {
    /// The value.
    pub value: T,
    /// Its occurrence count.
    pub count: usize,
}

/// Occurrence counts of values, remembering the order values were first seen.
///
/// The mode is the value with the highest count; among equal counts the value
/// seen first wins, so results do not depend on hash iteration order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    index: HashMap<T, usize>,
    entries: Vec<(T, usize)>,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Counts one occurrence of `value`.
    pub fn add(&mut self, value: T) {
        if let Some(&slot) = self.index.get(&value) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(value.clone(), self.entries.len());
            self.entries.push((value, 1));
        }
    }

    /// Occurrences of `value`.
    pub fn count(&self, value: &T) -> usize {
        self.index.get(value).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Most frequent value and its count, `None` when empty.
    pub fn mode(&self) -> Option<(&T, usize)> {
        let mut best: Option<(&T, usize)> = None;
        for (value, count) in &self.entries {
            if best.map_or(true, |(_, top)| *count > top) {
                best = Some((value, *count));
            }
        }
        best
    }

    /// Owned copy of the mode, `None` when empty.
    pub fn top(&self) -> Option<TopValue<T>> {
        self.mode().map(|(value, count)| TopValue {
            value: value.clone(),
            count,
        })
    }

    /// Values by descending count, ties in first-seen order.
    pub fn sorted(&self) -> Vec<(&T, usize)> {
        let mut counts: Vec<(&T, usize)> = self.entries.iter().map(|(v, c)| (v, *c)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.add(value);
        }
        table
    }
}

use indexmap::IndexMap;
use itertools::Itertools;
use std::hash::Hash;

/// a value together with the number of trips it occurred in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

/// counts occurrences of each key in a single pass, remembering the order in
/// which keys were first seen.
///
/// the mode is the key with the highest count. among keys tied on that count,
/// the one first encountered wins, which for a table built over trip rows is
/// the value appearing earliest in file order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K: Hash + Eq> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> FrequencyTable<K> {
    pub fn new() -> FrequencyTable<K> {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    #[cfg(test)]
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or_default()
    }

    /// number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// sum of all counts
    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// the most frequent key, or None for an empty table.
    pub fn mode(&self) -> Option<(&K, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&K, usize)>, (key, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((key, *count)),
            })
    }

    pub fn popular(&self) -> Option<Popular<K>>
    where
        K: Clone,
    {
        self.mode().map(|(value, count)| Popular {
            value: value.clone(),
            count,
        })
    }

    /// entries by descending count. ties keep first-encountered order.
    pub fn sorted_by_count(&self) -> Vec<(&K, usize)> {
        self.counts
            .iter()
            .map(|(k, c)| (k, *c))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect()
    }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

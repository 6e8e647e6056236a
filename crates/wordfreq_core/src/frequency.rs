use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::FrequencyEntry;

/// Final word -> count mapping.
///
/// Keys are unique. Iteration follows first-encounter order of each word in
/// the source text, which is also the tie-break order of [`WordFrequencies::top`].
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` to `word`, appending it if it has not been seen yet.
    pub fn add(&mut self, word: impl Into<String>, count: u64) {
        let word = word.into();
        match self.index.get(&word) {
            Some(&slot) => self.entries[slot].count += count,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push(FrequencyEntry { word, count });
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were mapped.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Up to `n` entries by descending count; equal counts keep encounter order.
    pub fn top(&self, n: usize) -> Vec<&FrequencyEntry> {
        let mut ranked: Vec<&FrequencyEntry> = self.entries.iter().collect();
        // Stable sort keeps encounter order among ties.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    pub fn to_hash_map(&self) -> HashMap<String, u64> {
        self.entries
            .iter()
            .map(|e| (e.word.clone(), e.count))
            .collect()
    }
}

impl FromIterator<FrequencyEntry> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = FrequencyEntry>>(iter: I) -> Self {
        let mut frequencies = WordFrequencies::new();
        for entry in iter {
            frequencies.add(entry.word, entry.count);
        }
        frequencies
    }
}

/// Mapping equality: same keys with the same counts, regardless of order.
impl PartialEq for WordFrequencies {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(&e.word) == Some(e.count))
    }
}

impl Eq for WordFrequencies {}

impl Serialize for WordFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.word, &entry.count)?;
        }
        map.end()
    }
}

// crates/core/src/table.rs
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::Serialize;

/// Occurrence count per normalized line.
///
/// Every key present has a count of at least 1; a missing key means 0.
/// Iteration order is unspecified and may differ between runs, so compare
/// tables with `==` (a mapping comparison), never by iterating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `line`.
    pub fn increment<'a>(&mut self, line: impl Into<Cow<'a, str>>) {
        self.add(line, 1);
    }

    /// Counts `n` more occurrences of `line`. Adding zero is a no-op.
    pub fn add<'a>(&mut self, line: impl Into<Cow<'a, str>>, n: u64) {
        if n == 0 {
            return;
        }
        let line = line.into();
        if let Some(count) = self.counts.get_mut(&*line) {
            *count = count.saturating_add(n);
        } else {
            self.counts.insert(line.into_owned(), n);
        }
    }

    /// Returns the count for `line`, 0 when it was never seen.
    #[must_use]
    pub fn get(&self, line: &str) -> u64 {
        self.counts.get(line).copied().unwrap_or(0)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0, |acc, c| acc.saturating_add(*c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(line, count)| (line.as_str(), *count))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Folds every count of `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        for (line, count) in other.counts {
            self.add(line, count);
        }
    }

    /// Read-only view of the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Entries ordered by count (descending), then by line.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<(String, u64)> {
        let mut entries: Vec<_> = self.counts.into_iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

impl<'a, S: Into<Cow<'a, str>>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.increment(line);
        }
    }
}

impl<'a, S: Into<Cow<'a, str>>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = hashbrown::hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

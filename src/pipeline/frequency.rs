use rustc_hash::FxHashMap;
use serde::Serialize;

/// Default size of the ranked table.
pub const TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

/// Token counts that remember the order tokens were first seen in.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: FxHashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// The `n` most frequent tokens, count descending. Equal counts keep
    /// first-seen order.
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(token, count)| RankedEntry::new(token.clone(), *count))
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for token in iter {
            table.add(token.as_ref());
        }
        table
    }
}

/// Counts `tokens` and returns the top [`TOP_N`] entries.
pub fn aggregate<S: AsRef<str>>(tokens: &[S]) -> Vec<RankedEntry> {
    tokens.iter().collect::<FrequencyTable>().top(TOP_N)
}

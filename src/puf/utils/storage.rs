use std::collections::HashMap;
use std::hash::Hash;

/// Flat storage of ranked-item patterns with their supports.
/// Patterns keep their discovery order; items are not re-sorted.
#[derive(Debug, Clone, Default)]
pub struct PatternStorage {
    pub items: Vec<usize>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<f64>,
}

impl PatternStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pattern(&mut self, items: &[usize], support: f64) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_pattern(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> f64 {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter_patterns(&self) -> impl Iterator<Item = (&[usize], f64)> {
        (0..self.len()).map(move |idx| (self.get_pattern(idx), self.supports[idx]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternStatus {
    /// Support estimated by the tree phase.
    Candidate,
    /// Support recomputed exactly from the transactions.
    Verified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern<L> {
    pub items: Vec<L>,
    pub support: f64,
    pub status: PatternStatus,
}

/// Labelled patterns in discovery order, addressable by their item sequence.
#[derive(Debug, Clone)]
pub struct UncertainPatterns<L> {
    patterns: Vec<Pattern<L>>,
    index: HashMap<Vec<L>, usize>,
}

impl<L> Default for UncertainPatterns<L> {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<L: Clone + Eq + Hash> UncertainPatterns<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pattern; an existing entry with the same items is overwritten in place.
    pub fn insert(&mut self, items: Vec<L>, support: f64, status: PatternStatus) {
        if let Some(&idx) = self.index.get(&items) {
            self.patterns[idx].support = support;
            self.patterns[idx].status = status;
            return;
        }
        self.index.insert(items.clone(), self.patterns.len());
        self.patterns.push(Pattern {
            items,
            support,
            status,
        });
    }

    pub fn get(&self, items: &[L]) -> Option<&Pattern<L>> {
        self.index.get(items).map(|&idx| &self.patterns[idx])
    }

    pub fn support(&self, items: &[L]) -> Option<f64> {
        self.get(items).map(|pattern| pattern.support)
    }

    pub fn contains(&self, items: &[L]) -> bool {
        self.index.contains_key(items)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern<L>> {
        self.patterns.iter()
    }

    /// Patterns grouped by length; entry `k` holds the patterns of `k + 1` items.
    pub fn levels(&self) -> Vec<Vec<&Pattern<L>>> {
        let mut levels: Vec<Vec<&Pattern<L>>> = Vec::new();
        for pattern in &self.patterns {
            let size = pattern.items.len();
            if size == 0 {
                continue;
            }
            while levels.len() < size {
                levels.push(Vec::new());
            }
            levels[size - 1].push(pattern);
        }
        levels
    }

    pub fn to_map(&self) -> HashMap<Vec<L>, f64> {
        self.patterns
            .iter()
            .map(|pattern| (pattern.items.clone(), pattern.support))
            .collect()
    }
}

impl<'a, L> IntoIterator for &'a UncertainPatterns<L> {
    type Item = &'a Pattern<L>;
    type IntoIter = std::slice::Iter<'a, Pattern<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

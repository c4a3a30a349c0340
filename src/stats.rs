// Lexipick Pool Statistics
// Count maps displayed next to the filter controls

use crate::types::{SyntCategory, Word};
use rustc_hash::FxHashMap;

/// Distribution of a word pool across the main filter dimensions
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    /// Words per syntactic category
    pub categories: FxHashMap<SyntCategory, usize>,

    /// Words per syllable count (words with a non-numeric count are not counted)
    pub syllables: FxHashMap<u32, usize>,

    /// Words per structure progression code
    pub structures: FxHashMap<String, usize>,

    /// Words per grapheme-complexity progression code
    pub grapheme_levels: FxHashMap<String, usize>,
}

impl PoolStats {
    /// Compute the distribution of a pool
    pub fn compute<'a, I>(pool: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut stats = PoolStats::default();

        for word in pool {
            *stats.categories.entry(word.category).or_insert(0) += 1;

            if let Some(n) = word.syllables() {
                *stats.syllables.entry(n).or_insert(0) += 1;
            }

            if !word.structure.is_empty() {
                *stats.structures.entry(word.structure.clone()).or_insert(0) += 1;
            }

            if !word.grapheme_level.is_empty() {
                *stats
                    .grapheme_levels
                    .entry(word.grapheme_level.clone())
                    .or_insert(0) += 1;
            }
        }

        stats
    }

    /// Total words counted (sum over categories)
    pub fn total(&self) -> usize {
        self.categories.values().sum()
    }
}

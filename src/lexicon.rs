// Lexipick Lexicon
// Main API combining the word base, filter engine and random selection

use crate::data::DataLoader;
use crate::filter;
use crate::select::{self, DistributionPreview};
use crate::stats::PoolStats;
use crate::types::{Word, WordFilters};
use log::info;
use rand::Rng;

/// The word base with its filtering and selection operations
///
/// Owns an immutable pool of records; every method takes `&self` and a
/// filter snapshot, so callers can share one `Lexicon` freely.
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Load the embedded word base
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let words = DataLoader::load()?;
        info!("loaded word base: {} records", words.len());
        Ok(Self { words })
    }

    /// Build a lexicon from caller-supplied JSON
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            words: DataLoader::parse(json)?,
        })
    }

    /// Build a lexicon from an in-memory pool
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The full pool
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Total records in the base
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// Words matching the filter configuration
    pub fn filter(&self, filters: &WordFilters) -> Vec<&Word> {
        filter::filter_pool(&self.words, filters)
    }

    /// Draw `count` words at random from the filtered pool, stratified
    /// across the multi-value filter dimensions
    pub fn select_random(&self, count: usize, filters: &WordFilters) -> Vec<&Word> {
        select::select_random(count, self.filter(filters), filters)
    }

    /// [`Lexicon::select_random`] with a caller-supplied RNG
    pub fn select_random_with_rng<R: Rng>(
        &self,
        count: usize,
        filters: &WordFilters,
        rng: &mut R,
    ) -> Vec<&Word> {
        select::select_random_with_rng(count, self.filter(filters), filters, rng)
    }

    /// Distribution preview for a prospective draw
    pub fn preview_distribution(
        &self,
        count: usize,
        filters: &WordFilters,
    ) -> Vec<DistributionPreview> {
        select::preview_distribution(count, filters)
    }

    /// Statistics of the filtered pool
    pub fn stats(&self, filters: &WordFilters) -> PoolStats {
        PoolStats::compute(self.filter(filters))
    }
}

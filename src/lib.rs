//! # Lexipick: Word-Base Filtering and Balanced Random Selection
//!
//! A curation engine for a French orthography/phonology word base: narrow the
//! base with a multi-field filter configuration, then draw word lists at
//! random with an even spread across the active filter values.
//!
//! ## Two Operations
//!
//! 1. **Filter** - evaluate each record against the configuration (< 1ms for
//!    a few thousand records)
//!    - text search tags with position and include/exclude semantics
//!    - category, structure, complexity and frequency code sets
//!    - syllable and letter-count ranges, image presence
//!    - grapheme/phoneme tags matched against the segmentation columns
//! 2. **Select** - stratified random draw over the filtered pool
//!    - every multi-value filter dimension becomes a distribution axis
//!    - each combination of values gets an even share, best effort
//!    - a preview reports the expected split before drawing
//!
//! ## Example Usage
//!
//! ```
//! use lexipick::{Lexicon, SyntCategory, WordFilters};
//!
//! let lexicon = Lexicon::new()?;
//!
//! // Narrow the base to one- and two-syllable nouns and verbs
//! let mut filters = WordFilters::default();
//! filters.categories = vec![SyntCategory::CommonNoun, SyntCategory::Verb];
//! filters.min_syllables = 1;
//! filters.max_syllables = 2;
//!
//! let pool = lexicon.filter(&filters);
//!
//! // Preview, then draw 12 words spread across category x syllables
//! let preview = lexicon.preview_distribution(12, &filters);
//! assert_eq!(preview.len(), 2);
//!
//! let selection = lexicon.select_random(12, &filters);
//! assert_eq!(selection.len(), 12.min(pool.len()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Filter Engine** - per-record predicate and pool narrowing
//! - **Random Selector** - criteria detection, combination quotas, uniform fill
//! - **Distribution Preview** - expected per-value counts for the UI
//! - **Pool Statistics** - counts per category/syllables/codes
//! - **GPMATCH Parser** - grapheme-phoneme correspondence annotations
//! - **Lexicon API** - main entry point combining all components

pub mod data;
pub mod filter;
pub mod gpmatch;
pub mod lexicon;
pub mod select;
pub mod stats;
pub mod types;

// Re-export main types and functions for convenience
pub use data::{DataInfo, DataLoader};
pub use filter::{filter_pool, matches};
pub use gpmatch::{parse_gpmatch, GraphemeKind, GraphemePhoneme};
pub use lexicon::Lexicon;
pub use select::{preview_distribution, select_random, select_random_with_rng, DistributionPreview};
pub use stats::PoolStats;
pub use types::{
    DataError, FilterTag, SyntCategory, TagMode, TagPosition, Word, WordFilters, LETTER_RANGE,
    SYLLABLE_RANGE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

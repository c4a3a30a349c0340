// Lexipick Random Selection
// Stratified random draws spread evenly across active filter values

use crate::types::{
    frequency_label, grapheme_level_label, structure_label, SyntCategory, TagMode, Word,
    WordFilters, SYLLABLE_RANGE,
};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

/// One entry of the distribution preview shown before a draw
///
/// `per_value` rounds to nearest, which can differ from the selector's
/// ceiling-based internal quota; the preview must not over-promise, the
/// selector must not under-fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPreview {
    /// Dimension name plus its active values, e.g. "Catégories (Nom commun, Verbe)"
    pub label: String,

    /// Expected words per value (or the full count for a single-value dimension)
    pub per_value: usize,

    /// True when the dimension has exactly one active value: every
    /// selected word shares it, nothing is split
    pub is_single_value: bool,
}

/// Filter dimensions that can stratify a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Syllables,
    Categories,
    Structures,
    GraphemeLevels,
    Frequencies,
    Graphemes,
    Phonemes,
}

impl Dimension {
    fn title(&self) -> &'static str {
        match self {
            Dimension::Syllables => "Syllabes",
            Dimension::Categories => "Catégories",
            Dimension::Structures => "Structures",
            Dimension::GraphemeLevels => "Progression graphèmes",
            Dimension::Frequencies => "Appui lexical",
            Dimension::Graphemes => "Graphèmes",
            Dimension::Phonemes => "Phonèmes",
        }
    }
}

/// A filter dimension with its active values
///
/// `values` are the raw comparable forms (codes, digits, lowercased
/// segments); `display` the human-readable ones for the preview label.
#[derive(Debug, Clone)]
struct Criterion {
    dim: Dimension,
    values: Vec<String>,
    display: Vec<String>,
}

impl Criterion {
    fn label(&self) -> String {
        format!("{} ({})", self.dim.title(), self.display.join(", "))
    }
}

/// Select `count` words at random, spread as evenly as the pool allows
/// across the combinations of multi-value filter dimensions
///
/// Returns exactly `min(count, pool.len())` records, distinct by
/// identity, in shuffled order. Combinations the pool cannot fill roll
/// their quota into a uniform fill; a short pool is clamped, never an
/// error.
///
/// Uses the thread RNG; see [`select_random_with_rng`] for reproducible
/// draws.
pub fn select_random<'a, I>(count: usize, pool: I, filters: &WordFilters) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    select_random_with_rng(count, pool, filters, &mut rand::thread_rng())
}

/// [`select_random`] with a caller-supplied RNG
pub fn select_random_with_rng<'a, I, R>(
    count: usize,
    pool: I,
    filters: &WordFilters,
    rng: &mut R,
) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
    R: Rng,
{
    let pool: Vec<&Word> = pool.into_iter().collect();
    let criteria: Vec<Criterion> = active_criteria(filters)
        .into_iter()
        .filter(|c| c.values.len() > 1)
        .collect();

    // No distribution criteria: plain uniform draw (still distinct by identity)
    if criteria.is_empty() {
        let mut seen = FxHashSet::default();
        let mut all: Vec<&Word> = pool
            .into_iter()
            .filter(|w| seen.insert(w.identity()))
            .collect();
        all.shuffle(rng);
        all.truncate(count);
        return all;
    }

    let combos = combinations(&criteria);
    // Ceiling, not rounding: strata must never under-fill by quota math
    let per_combination = count.div_ceil(combos.len());
    debug!(
        "stratified draw: {} criteria, {} combinations, {} per combination",
        criteria.len(),
        combos.len(),
        per_combination
    );

    let mut selected: Vec<&Word> = Vec::new();
    let mut claimed: FxHashSet<String> = FxHashSet::default();

    for combo in &combos {
        let mut matching: Vec<&Word> = pool
            .iter()
            .copied()
            .filter(|w| matches_combination(w, combo))
            .collect();
        matching.shuffle(rng);

        let mut taken = 0;
        for word in matching {
            if taken == per_combination || selected.len() >= count {
                break;
            }
            if claimed.insert(word.identity()) {
                selected.push(word);
                taken += 1;
            }
        }
        if selected.len() >= count {
            break;
        }
    }

    // Under-filled strata: complete uniformly from whatever is unclaimed
    if selected.len() < count {
        let mut remaining: Vec<&Word> = pool
            .iter()
            .copied()
            .filter(|w| !claimed.contains(&w.identity()))
            .collect();
        remaining.shuffle(rng);
        for word in remaining {
            if selected.len() >= count {
                break;
            }
            if claimed.insert(word.identity()) {
                selected.push(word);
            }
        }
    }

    selected.shuffle(rng);
    selected.truncate(count);
    selected
}

/// Compute the distribution preview for a prospective draw
///
/// One entry per active dimension: multi-value dimensions show
/// `round(count / values)`, single-value ones show the full count with
/// `is_single_value` set. The labeled dimensions match exactly those the
/// selector would stratify on.
pub fn preview_distribution(count: usize, filters: &WordFilters) -> Vec<DistributionPreview> {
    active_criteria(filters)
        .iter()
        .map(|c| {
            if c.values.len() > 1 {
                DistributionPreview {
                    label: c.label(),
                    per_value: (count as f64 / c.values.len() as f64).round() as usize,
                    is_single_value: false,
                }
            } else {
                DistributionPreview {
                    label: c.label(),
                    per_value: count,
                    is_single_value: true,
                }
            }
        })
        .collect()
}

/// Dimensions with at least one active value, in discovery order:
/// syllables, categories, structures, grapheme-complexity, frequencies,
/// graphemes, phonemes
///
/// The syllable range counts as active only when narrowed from the full
/// base range; `min == max` is a single value, never a distribution axis.
fn active_criteria(filters: &WordFilters) -> Vec<Criterion> {
    let mut criteria = Vec::new();

    if (filters.min_syllables, filters.max_syllables) != SYLLABLE_RANGE
        && filters.min_syllables <= filters.max_syllables
    {
        let values: Vec<String> = (filters.min_syllables..=filters.max_syllables)
            .map(|n| n.to_string())
            .collect();
        criteria.push(Criterion {
            dim: Dimension::Syllables,
            display: values.clone(),
            values,
        });
    }

    if !filters.categories.is_empty() {
        criteria.push(Criterion {
            dim: Dimension::Categories,
            values: filters
                .categories
                .iter()
                .map(|c| c.code().to_string())
                .collect(),
            display: filters
                .categories
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
        });
    }

    if !filters.structures.is_empty() {
        criteria.push(Criterion {
            dim: Dimension::Structures,
            values: filters.structures.clone(),
            display: filters
                .structures
                .iter()
                .map(|c| structure_label(c).to_string())
                .collect(),
        });
    }

    if !filters.grapheme_display.is_empty() {
        criteria.push(Criterion {
            dim: Dimension::GraphemeLevels,
            values: filters.grapheme_display.clone(),
            display: filters
                .grapheme_display
                .iter()
                .map(|c| grapheme_level_label(c).to_string())
                .collect(),
        });
    }

    if !filters.frequencies.is_empty() {
        criteria.push(Criterion {
            dim: Dimension::Frequencies,
            values: filters.frequencies.clone(),
            display: filters
                .frequencies
                .iter()
                .map(|c| frequency_label(c).to_string())
                .collect(),
        });
    }

    for (dim, tags) in [
        (Dimension::Graphemes, &filters.graphemes),
        (Dimension::Phonemes, &filters.phonemes),
    ] {
        let values = include_tag_values(tags);
        if !values.is_empty() {
            criteria.push(Criterion {
                dim,
                display: values.clone(),
                values,
            });
        }
    }

    criteria
}

/// Distinct include-mode tag values, lowercased, in tag order
fn include_tag_values(tags: &[crate::types::FilterTag]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    tags.iter()
        .filter(|t| t.mode == TagMode::Include && !t.value.is_empty())
        .map(|t| t.value.to_lowercase())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// Cartesian product of the criteria's values, first criterion varying
/// slowest
fn combinations(criteria: &[Criterion]) -> Vec<Vec<(Dimension, String)>> {
    match criteria {
        [] => Vec::new(),
        [first] => first
            .values
            .iter()
            .map(|v| vec![(first.dim, v.clone())])
            .collect(),
        [first, rest @ ..] => {
            let tails = combinations(rest);
            first
                .values
                .iter()
                .flat_map(|v| {
                    tails.iter().map(move |tail| {
                        let mut combo = Vec::with_capacity(tail.len() + 1);
                        combo.push((first.dim, v.clone()));
                        combo.extend(tail.iter().cloned());
                        combo
                    })
                })
                .collect()
        }
    }
}

/// Whether a word carries every value of a combination
///
/// Grapheme and phoneme values use segment-equality membership, the same
/// semantic as the filter predicate's `anywhere` position.
fn matches_combination(word: &Word, combo: &[(Dimension, String)]) -> bool {
    combo.iter().all(|(dim, value)| match dim {
        Dimension::Syllables => value
            .parse::<u32>()
            .ok()
            .is_some_and(|v| word.syllables() == Some(v)),
        Dimension::Categories => word.category.code() == value,
        Dimension::Structures => &word.structure == value,
        Dimension::GraphemeLevels => &word.grapheme_level == value,
        Dimension::Frequencies => &word.frequency == value,
        Dimension::Graphemes => word.grapheme_segments().iter().any(|s| s == value),
        Dimension::Phonemes => word.phoneme_segments().iter().any(|s| s == value),
    })
}

// Lexipick Filter Engine
// Evaluates word records against the active filter configuration

use crate::types::{FilterTag, TagMode, TagPosition, Word, WordFilters};
use log::debug;

/// Check a single word against the full filter configuration
///
/// Pure and total: no rule ever errors. Malformed numeric columns degrade
/// to "rule skipped"; missing segmentation data fails include-mode segment
/// tags and passes exclude-mode ones. Rules short-circuit on first failure.
///
/// # Example
/// ```
/// use lexipick::filter::matches;
/// use lexipick::types::{FilterTag, TagPosition, Word, WordFilters};
///
/// let word: Word = serde_json::from_str(
///     r#"{"MOTS": "chat", "PHONEMES": "Sa", "SYNT": "NC"}"#,
/// ).unwrap();
///
/// let mut filters = WordFilters::default();
/// assert!(matches(&word, &filters));
///
/// filters.search.push(FilterTag::include("ch", TagPosition::Start));
/// assert!(matches(&word, &filters));
/// ```
pub fn matches(word: &Word, filters: &WordFilters) -> bool {
    let ortho = word.ortho.to_lowercase();

    // Live query: its own layer, applied before the sticky tags
    let live = &filters.live_search;
    if !live.value.is_empty() {
        let hit = text_position_match(&ortho, &live.value.to_lowercase(), live.position);
        let pass = match live.mode {
            TagMode::Include => hit,
            TagMode::Exclude => !hit,
        };
        if !pass {
            return false;
        }
    }

    // Sticky search tags on the orthographic form
    if !tag_set_passes(&filters.search, |tag, val| {
        text_position_match(&ortho, val, tag.position)
    }) {
        return false;
    }

    // Syntactic category
    if !filters.categories.is_empty() && !filters.categories.contains(&word.category) {
        return false;
    }

    // Syllable range; a non-numeric count skips the rule
    if let Some(n) = word.syllables() {
        if n < filters.min_syllables || n > filters.max_syllables {
            return false;
        }
    }

    // Progression and frequency codes: plain set membership
    if !filters.structures.is_empty() && !filters.structures.contains(&word.structure) {
        return false;
    }
    if !filters.grapheme_display.is_empty()
        && !filters.grapheme_display.contains(&word.grapheme_level)
    {
        return false;
    }
    if !filters.frequencies.is_empty() && !filters.frequencies.contains(&word.frequency) {
        return false;
    }

    // Grapheme tags against the hyphen-delimited segmentation
    if !filters.graphemes.is_empty() {
        let segments = word.grapheme_segments();
        if !tag_set_passes(&filters.graphemes, |tag, val| {
            segment_position_match(&segments, val, tag.position)
        }) {
            return false;
        }
    }

    // Phoneme tags against the dot-delimited segmentation
    if !filters.phonemes.is_empty() {
        let segments = word.phoneme_segments();
        if !tag_set_passes(&filters.phonemes, |tag, val| {
            segment_position_match(&segments, val, tag.position)
        }) {
            return false;
        }
    }

    // Image presence tri-state
    if let Some(required) = filters.has_image {
        if word.has_image() != required {
            return false;
        }
    }

    // Letter range
    let letters = word.letters();
    letters >= filters.min_letters && letters <= filters.max_letters
}

/// Narrow a pool to the words matching the configuration
pub fn filter_pool<'a>(pool: &'a [Word], filters: &WordFilters) -> Vec<&'a Word> {
    let kept: Vec<&Word> = pool.iter().filter(|w| matches(w, filters)).collect();
    debug!("filter kept {}/{} words", kept.len(), pool.len());
    kept
}

/// Aggregate a tag set: include tags are OR'd (vacuously true when there
/// are none), a single matching exclude tag rejects. Empty-valued tags
/// are inert.
fn tag_set_passes<F>(tags: &[FilterTag], hit: F) -> bool
where
    F: Fn(&FilterTag, &str) -> bool,
{
    let mut has_include = false;
    let mut include_hit = false;

    for tag in tags {
        if tag.value.is_empty() {
            continue;
        }
        let val = tag.value.to_lowercase();
        match tag.mode {
            TagMode::Include => {
                has_include = true;
                if !include_hit && hit(tag, &val) {
                    include_hit = true;
                }
            }
            TagMode::Exclude => {
                if hit(tag, &val) {
                    return false;
                }
            }
        }
    }

    !has_include || include_hit
}

/// Position match on raw text. `Middle` requires at least one character
/// on each side of the occurrence.
fn text_position_match(text: &str, value: &str, position: TagPosition) -> bool {
    match position {
        TagPosition::Start => text.starts_with(value),
        TagPosition::End => text.ends_with(value),
        TagPosition::Middle => text
            .match_indices(value)
            .any(|(i, m)| i > 0 && i + m.len() < text.len()),
        TagPosition::Anywhere => text.contains(value),
    }
}

/// Position match on a segment sequence. Segment equality, not substring:
/// `Middle` means some segment that is neither first nor last equals the
/// value. An empty sequence matches nothing.
fn segment_position_match(segments: &[String], value: &str, position: TagPosition) -> bool {
    if segments.is_empty() {
        return false;
    }
    match position {
        TagPosition::Start => segments[0] == value,
        TagPosition::End => segments[segments.len() - 1] == value,
        TagPosition::Middle => {
            segments.len() > 2 && segments[1..segments.len() - 1].iter().any(|s| s == value)
        }
        TagPosition::Anywhere => segments.iter().any(|s| s == value),
    }
}

// Lexipick Type Definitions
// Word records, filter configuration and display labels for the Manulex word base

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Syntactic categories of the word base
///
/// The JSON columns carry the short codes (NC, ADJ, ...); anything the
/// base does not document maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntCategory {
    /// Common noun ("Nom commun")
    #[serde(rename = "NC")]
    CommonNoun,

    /// Adjective
    #[serde(rename = "ADJ")]
    Adjective,

    /// Verb
    #[serde(rename = "VER")]
    Verb,

    /// Adverb
    #[serde(rename = "ADV")]
    Adverb,

    /// Preposition
    #[serde(rename = "PRE")]
    Preposition,

    /// Proper noun ("Nom propre")
    #[serde(rename = "NP")]
    ProperNoun,

    /// Uncategorized
    #[serde(other, rename = "AUTRE")]
    Other,
}

impl SyntCategory {
    /// Short code as it appears in the word base columns
    pub fn code(&self) -> &'static str {
        match self {
            SyntCategory::CommonNoun => "NC",
            SyntCategory::Adjective => "ADJ",
            SyntCategory::Verb => "VER",
            SyntCategory::Adverb => "ADV",
            SyntCategory::Preposition => "PRE",
            SyntCategory::ProperNoun => "NP",
            SyntCategory::Other => "AUTRE",
        }
    }

    /// French display label, as shown in the filter panels
    pub fn label(&self) -> &'static str {
        match self {
            SyntCategory::CommonNoun => "Nom commun",
            SyntCategory::Adjective => "Adjectif",
            SyntCategory::Verb => "Verbe",
            SyntCategory::Adverb => "Adverbe",
            SyntCategory::Preposition => "Préposition",
            SyntCategory::ProperNoun => "Nom propre",
            SyntCategory::Other => "Autre",
        }
    }
}

impl std::fmt::Display for SyntCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Display label for a syllabic-structure progression code (a-g)
pub fn structure_label(code: &str) -> &'static str {
    match code {
        "a" => "Syllabes simples (CV)",
        "b" => "Voyelle initiale / consonne finale",
        "c" => "E final muet",
        "d" => "Consonnes doubles",
        "e" => "Consonnes muettes",
        "f" => "CC et VV simples",
        "g" => "CC et VV complexes",
        _ => "Autre",
    }
}

/// Display label for a grapheme-complexity progression code (1-13)
pub fn grapheme_level_label(code: &str) -> &'static str {
    match code {
        "1" => "Graphèmes simples non ambigus",
        "2" => "Digraphes très simples (ou, eu, ch, gn)",
        "3" => "Digraphes fréquents basiques",
        "4" => "Consonnes contextuelles (c/s, g/j)",
        "5" => "N contextuel",
        "6" => "Voyelles contextuelles (en, ai, eau)",
        "7" => "Voyelles complexes (oin, ien)",
        "8" => "Graphies complexes",
        "9" => "Voyelles nasales complexes",
        "10" => "Graphies conditionnelles (gea, gui)",
        "11" => "Graphies ail/eil",
        "12" => "Diphtongues rares (oy, uy, ay)",
        "13" => "E contextuel",
        _ => "Autre",
    }
}

/// Display label for a lexical-support (frequency) code (1-4)
pub fn frequency_label(code: &str) -> &'static str {
    match code {
        "1" => "Fréquent",
        "2" => "Peu fréquent",
        "3" => "Très peu fréquent",
        "4" => "Rare / Inconnu",
        _ => "Autre",
    }
}

/// One lexical entry of the word base
///
/// Column names follow the v7 export of the base; the `alias` attributes
/// accept the legacy v3 names so lists saved by older exports still load.
/// Columns the core never reads land in `extra` untouched, so a record
/// round-trips through save/load without losing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Stable identifier; absent in older exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Orthographic form
    #[serde(rename = "MOTS", alias = "ORTHO")]
    pub ortho: String,

    /// Phonemic transcription
    #[serde(rename = "PHONEMES", alias = "PHON", default)]
    pub phonemes: String,

    /// Grapheme inventory
    #[serde(rename = "GRAPHEMES", alias = "GRAPHS", default)]
    pub graphemes: String,

    /// Syntactic category
    #[serde(rename = "SYNT")]
    pub category: SyntCategory,

    /// Lexical-support (frequency) code
    #[serde(rename = "APPUI LEXICAL", alias = "code fréquence", default)]
    pub frequency: String,

    /// Syllable count, kept as the base ships it (a string column)
    #[serde(rename = "NBSYLL", default)]
    pub syllable_count: String,

    /// Syllable segmentation
    #[serde(rename = "segmentation syllabique", alias = "PSYLL", default)]
    pub syllable_seg: String,

    /// Syllabic-structure progression code (a-g)
    #[serde(rename = "progression structure", alias = "code structure", default)]
    pub structure: String,

    /// Grapheme-complexity progression code (1-13)
    #[serde(rename = "progression graphèmes", alias = "code graphèmes", default)]
    pub grapheme_level: String,

    /// Grapheme segmentation, hyphen-delimited (ch-a-t)
    #[serde(rename = "segmentation graphèmes", alias = "GSEG", default)]
    pub grapheme_seg: String,

    /// Phoneme segmentation, dot-delimited (S.a)
    #[serde(rename = "segmentation phonèmes", alias = "PSEG", default)]
    pub phoneme_seg: String,

    /// Grapheme-phoneme correspondence string, e.g. "(ch-S.a-a.t-#)"
    #[serde(rename = "GPMATCH", default)]
    pub gp_match: String,

    /// Letter count; when absent or unparsable the orthographic length stands in
    #[serde(rename = "NBLET", default, skip_serializing_if = "Option::is_none")]
    pub letter_count: Option<String>,

    /// Associated-image marker; non-empty means an image exists
    #[serde(rename = "image associée", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Passthrough for the open-ended statistical columns
    #[serde(flatten)]
    pub extra: FxHashMap<String, String>,
}

impl Word {
    /// Identity used for deduplication and cross-session tracking
    ///
    /// Falls back to a derived key when the record carries no `uid`.
    pub fn identity(&self) -> String {
        match &self.uid {
            Some(uid) => uid.clone(),
            None => format!("{}_{}_{}", self.ortho, self.phonemes, self.category.code()),
        }
    }

    /// Syllable count parsed from its string column, if numeric
    pub fn syllables(&self) -> Option<u32> {
        self.syllable_count.trim().parse().ok()
    }

    /// Letter count: the NBLET column when parsable, else the character
    /// count of the orthographic form
    pub fn letters(&self) -> u32 {
        self.letter_count
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(|| self.ortho.chars().count() as u32)
    }

    /// Whether the record carries an associated image
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Grapheme segments, lowercased (empty when no segmentation data)
    pub fn grapheme_segments(&self) -> Vec<String> {
        split_segments(&self.grapheme_seg, '-')
    }

    /// Phoneme segments, lowercased (empty when no segmentation data)
    pub fn phoneme_segments(&self) -> Vec<String> {
        split_segments(&self.phoneme_seg, '.')
    }
}

fn split_segments(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Where a tag value must sit in the orthographic form or segment sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPosition {
    /// Prefix / first segment
    Start,
    /// Suffix / last segment
    End,
    /// Strictly interior: not touching either end
    Middle,
    /// Any occurrence
    Anywhere,
}

/// Whether a tag requires or forbids its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    Include,
    Exclude,
}

/// One tagged text pattern of a search / grapheme / phoneme filter section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTag {
    pub value: String,
    pub position: TagPosition,
    pub mode: TagMode,
}

impl FilterTag {
    /// Include-mode tag at the given position
    pub fn include(value: impl Into<String>, position: TagPosition) -> Self {
        Self {
            value: value.into(),
            position,
            mode: TagMode::Include,
        }
    }

    /// Exclude-mode tag at the given position
    pub fn exclude(value: impl Into<String>, position: TagPosition) -> Self {
        Self {
            value: value.into(),
            position,
            mode: TagMode::Exclude,
        }
    }
}

/// Full syllable range of the base
pub const SYLLABLE_RANGE: (u32, u32) = (1, 5);

/// Full letter-count range of the base
pub const LETTER_RANGE: (u32, u32) = (1, 14);

/// The set of active constraints applied to a word pool
///
/// Every field defaults to "no constraint": an all-default `WordFilters`
/// matches every record of the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordFilters {
    /// Sticky search tags on the orthographic form
    pub search: Vec<FilterTag>,

    /// Live query for incremental typing; empty value = inactive
    pub live_search: FilterTag,

    /// Allowed syntactic categories; empty = all
    pub categories: Vec<SyntCategory>,

    pub min_syllables: u32,
    pub max_syllables: u32,

    /// Allowed structure progression codes; empty = all
    pub structures: Vec<String>,

    /// Allowed grapheme-complexity progression codes; empty = all
    pub grapheme_display: Vec<String>,

    /// Tags matched against the grapheme segmentation
    pub graphemes: Vec<FilterTag>,

    /// Tags matched against the phoneme segmentation
    pub phonemes: Vec<FilterTag>,

    /// Allowed frequency codes; empty = all
    pub frequencies: Vec<String>,

    pub min_letters: u32,
    pub max_letters: u32,

    /// Some(true) = only words with an image, Some(false) = only without,
    /// None = no constraint
    pub has_image: Option<bool>,
}

impl Default for WordFilters {
    fn default() -> Self {
        Self {
            search: Vec::new(),
            live_search: FilterTag::include("", TagPosition::Anywhere),
            categories: Vec::new(),
            min_syllables: SYLLABLE_RANGE.0,
            max_syllables: SYLLABLE_RANGE.1,
            structures: Vec::new(),
            grapheme_display: Vec::new(),
            graphemes: Vec::new(),
            phonemes: Vec::new(),
            frequencies: Vec::new(),
            min_letters: LETTER_RANGE.0,
            max_letters: LETTER_RANGE.1,
            has_image: None,
        }
    }
}

/// Word-base loading errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to parse word base: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Word base is empty")]
    EmptyBase,
}

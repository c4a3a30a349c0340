// Lexipick GPMATCH Parser
// Splits grapheme-phoneme correspondence strings into classified pairs

/// Kind of a grapheme within a correspondence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphemeKind {
    /// Vowel grapheme
    Voyelle,
    /// Consonant grapheme
    Consonne,
    /// Silent letters (phoneme `#` or `*`)
    Muette,
}

impl std::fmt::Display for GraphemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphemeKind::Voyelle => write!(f, "voyelle"),
            GraphemeKind::Consonne => write!(f, "consonne"),
            GraphemeKind::Muette => write!(f, "muette"),
        }
    }
}

/// One grapheme-phoneme pair of a correspondence string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemePhoneme {
    pub grapheme: String,
    pub phoneme: String,
    pub kind: GraphemeKind,
}

/// Vowel graphemes of French orthography, including the multi-letter ones
const VOWEL_GRAPHEMES: &[&str] = &[
    "a", "à", "â", "e", "é", "è", "ê", "ë", "i", "î", "ï", "o", "ô", "u", "ù", "û", "ü", "y", "ai",
    "au", "eau", "ei", "eu", "œu", "ou", "oi", "oin", "ien", "an", "am", "en", "em", "in", "im",
    "on", "om", "un", "um", "ein", "ain", "aim", "er", "ez", "et", "ay", "oy", "uy",
];

/// Phoneme markers flagging silent letters
const SILENT_MARKERS: &[&str] = &["#", "*"];

/// Parse a GPMATCH correspondence string into grapheme-phoneme pairs
///
/// Format: `"(ch-S.a-a.t-#)"`: dot-separated pairs inside parentheses,
/// each pair `grapheme-phoneme`. Malformed pairs are skipped, an empty or
/// missing string yields an empty list.
///
/// # Example
/// ```
/// use lexipick::gpmatch::{parse_gpmatch, GraphemeKind};
///
/// let pairs = parse_gpmatch("(ch-S.a-a.t-#)");
/// assert_eq!(pairs.len(), 3);
/// assert_eq!(pairs[0].grapheme, "ch");
/// assert_eq!(pairs[1].kind, GraphemeKind::Voyelle);
/// assert_eq!(pairs[2].kind, GraphemeKind::Muette);
/// ```
pub fn parse_gpmatch(gpmatch: &str) -> Vec<GraphemePhoneme> {
    let content = gpmatch
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');

    if content.is_empty() {
        return Vec::new();
    }

    content
        .split('.')
        .filter_map(|pair| {
            let (grapheme, phoneme) = pair.split_once('-')?;
            if grapheme.is_empty() {
                return None;
            }

            let kind = if SILENT_MARKERS.contains(&phoneme) {
                GraphemeKind::Muette
            } else if is_vowel_grapheme(grapheme) {
                GraphemeKind::Voyelle
            } else {
                GraphemeKind::Consonne
            };

            Some(GraphemePhoneme {
                grapheme: grapheme.to_string(),
                phoneme: phoneme.to_string(),
                kind,
            })
        })
        .collect()
}

/// Whether a grapheme is a vowel grapheme
pub fn is_vowel_grapheme(grapheme: &str) -> bool {
    let lower = grapheme.to_lowercase();
    VOWEL_GRAPHEMES.contains(&lower.as_str())
}

// Data loader for the embedded word base
// The base is a Manulex-style JSON extract compiled into the binary

use crate::types::{DataError, Word};

/// Embedded word base (JSON array of records)
pub const WORDS_JSON: &str = include_str!("../data/words.json");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Raw JSON of the embedded word base
    pub fn words_json() -> &'static str {
        WORDS_JSON
    }

    /// Parse the embedded word base
    pub fn load() -> Result<Vec<Word>, DataError> {
        Self::parse(WORDS_JSON)
    }

    /// Parse a caller-supplied JSON word base
    ///
    /// Accepts both the current v7 column names and the legacy ones.
    pub fn parse(json: &str) -> Result<Vec<Word>, DataError> {
        let words: Vec<Word> = serde_json::from_str(json)?;
        if words.is_empty() {
            return Err(DataError::EmptyBase);
        }
        Ok(words)
    }

    /// Get info about the embedded data
    pub fn info() -> DataInfo {
        DataInfo {
            byte_size: WORDS_JSON.len(),
        }
    }
}

/// Information about the embedded word base
#[derive(Debug, Clone)]
pub struct DataInfo {
    /// Size of the embedded JSON in bytes
    pub byte_size: usize,
}

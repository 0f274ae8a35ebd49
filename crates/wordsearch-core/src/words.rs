//! Word normalization and the in-memory word catalog.
//!
//! Every word exists in two forms: the normalized form written into the
//! grid (no accents, no spaces or punctuation, uppercase) and the display
//! form shown in the word list (uppercase, accents kept).

use crate::error::{Result, WordSearchError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Words shorter than this after normalization are never used
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize a word for the grid
///
/// Decomposes accented letters, drops the combining marks along with
/// spaces, hyphens and apostrophes, then uppercases.
///
/// ```
/// use wordsearch_core::words::normalize;
/// assert_eq!(normalize("coração"), "CORACAO");
/// assert_eq!(normalize("guarda-chuva"), "GUARDACHUVA");
/// ```
pub fn normalize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let stripped: String = word
        .nfd()
        .filter(|&c| !is_combining_mark(c) && c != ' ' && c != '-' && c != '\'')
        .collect();

    stripped.nfc().collect::<String>().to_uppercase()
}

/// Format a word for the word list: uppercase with accents kept
pub fn to_display(word: &str) -> String {
    word.to_uppercase()
}

/// Words of one category, normalized and display forms index-aligned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCategory {
    category_id: String,
    normalized_words: Vec<String>,
    display_words: Vec<String>,
}

impl WordCategory {
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn normalized_words(&self) -> &[String] {
        &self.normalized_words
    }

    pub fn display_words(&self) -> &[String] {
        &self.display_words
    }

    pub fn word_count(&self) -> usize {
        self.normalized_words.len()
    }
}

/// In-memory word bank keyed by category id
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    categories: BTreeMap<String, WordCategory>,
}

impl WordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a category from raw words
    ///
    /// Words shorter than [`MIN_WORD_LENGTH`] after normalization are
    /// skipped.
    pub fn add_category<S: AsRef<str>>(&mut self, category_id: &str, words: &[S]) -> Result<()> {
        if category_id.is_empty() {
            return Err(WordSearchError::invalid("category_id cannot be empty."));
        }

        let mut normalized_words = Vec::with_capacity(words.len());
        let mut display_words = Vec::with_capacity(words.len());

        for word in words {
            let word = word.as_ref();
            let norm = normalize(word);
            if norm.chars().count() < MIN_WORD_LENGTH {
                continue;
            }
            normalized_words.push(norm);
            display_words.push(to_display(word));
        }

        self.categories.insert(
            category_id.to_string(),
            WordCategory {
                category_id: category_id.to_string(),
                normalized_words,
                display_words,
            },
        );
        Ok(())
    }

    /// Add a category from a decoded words file
    pub fn add_words_file(&mut self, file: &WordsFile) -> Result<()> {
        self.add_category(&file.category_id, file.words.as_slice())
    }

    pub fn category(&self, category_id: &str) -> Result<&WordCategory> {
        self.categories
            .get(category_id)
            .ok_or_else(|| WordSearchError::NotFound(category_id.to_string()))
    }

    pub fn has_category(&self, category_id: &str) -> bool {
        self.categories.contains_key(category_id)
    }

    /// Loaded category ids, sorted
    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Every category's words pooled together, in category id order
    pub fn all_words(&self) -> (Vec<String>, Vec<String>) {
        let mut normalized = Vec::new();
        let mut display = Vec::new();
        for category in self.categories.values() {
            normalized.extend(category.normalized_words.iter().cloned());
            display.extend(category.display_words.iter().cloned());
        }
        (normalized, display)
    }
}

/// A bundled words file, e.g. `animais.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsFile {
    pub category_id: String,
    pub words: Vec<String>,
}

impl WordsFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One entry of the category index file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// The category index file (`categories.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<CategoryData>,
}

impl CategoriesFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

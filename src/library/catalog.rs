//! Word libraries and the catalog that indexes them by name

use crate::core::{letter_count, normalize};
use crate::error::LoadFailure;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// A named, immutable list of lower-case words
///
/// Duplicates from the source are kept in `words`; membership checks go
/// through a hash index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLibrary {
    name: String,
    words: Vec<String>,
    index: FxHashSet<String>,
}

/// Summary of one library
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryInfo {
    pub name: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub average_length: f64,
    /// Word length -> number of entries with that length
    pub length_histogram: BTreeMap<usize, usize>,
}

impl WordLibrary {
    /// Build a library, trimming and lower-casing each word
    #[must_use]
    pub fn new(name: impl Into<String>, words: Vec<String>) -> Self {
        let words: Vec<String> = words.iter().map(|w| normalize(w)).collect();
        let index = words.iter().cloned().collect();
        Self {
            name: name.into(),
            words,
            index,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Words in source order, duplicates included
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// All entries with exactly `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| letter_count(w) == length)
            .map(String::as_str)
            .collect()
    }

    /// Sorted distinct word lengths
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.length_histogram().into_keys().collect()
    }

    fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(letter_count(word)).or_insert(0) += 1;
        }
        histogram
    }

    #[must_use]
    pub fn info(&self) -> LibraryInfo {
        let total_letters: usize = self.words.iter().map(|w| letter_count(w)).sum();
        let average_length = if self.words.is_empty() {
            0.0
        } else {
            total_letters as f64 / self.words.len() as f64
        };

        LibraryInfo {
            name: self.name.clone(),
            total_words: self.words.len(),
            unique_words: self.index.len(),
            average_length,
            length_histogram: self.length_histogram(),
        }
    }
}

/// Mapping from library name to library, built in one load
///
/// Loading again produces a fresh catalog; there is no incremental update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryCatalog {
    libraries: BTreeMap<String, WordLibrary>,
    failures: Vec<LoadFailure>,
}

impl LibraryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding a single library built from raw words
    ///
    /// # Examples
    /// ```
    /// use wordle_game::library::LibraryCatalog;
    ///
    /// let catalog = LibraryCatalog::from_words("animals", &["Cat", "horse"]);
    /// assert!(catalog.is_member("animals", "CAT"));
    /// assert_eq!(catalog.available_lengths("animals"), vec![3, 5]);
    /// ```
    #[must_use]
    pub fn from_words(name: &str, words: &[&str]) -> Self {
        let mut catalog = Self::new();
        catalog.insert(WordLibrary::new(name, super::loader::words_from_slice(words)));
        catalog
    }

    /// Add or replace a library under its own name
    pub fn insert(&mut self, library: WordLibrary) {
        self.libraries.insert(library.name().to_string(), library);
    }

    pub(crate) fn record_failure(&mut self, failure: LoadFailure) {
        self.failures.push(failure);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WordLibrary> {
        self.libraries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.libraries.contains_key(name)
    }

    /// Library names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.libraries.keys().map(String::as_str)
    }

    pub fn libraries(&self) -> impl Iterator<Item = &WordLibrary> {
        self.libraries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Files skipped during the load that built this catalog
    #[must_use]
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Sorted distinct lengths in the named library; empty if it is unknown
    #[must_use]
    pub fn available_lengths(&self, name: &str) -> Vec<usize> {
        self.get(name).map(WordLibrary::lengths).unwrap_or_default()
    }

    #[must_use]
    pub fn library_info(&self, name: &str) -> Option<LibraryInfo> {
        self.get(name).map(WordLibrary::info)
    }

    /// Case-insensitive membership; `false` for an unknown library
    #[must_use]
    pub fn is_member(&self, name: &str, word: &str) -> bool {
        self.get(name).is_some_and(|library| library.contains(word))
    }
}

//! Word list loading utilities
//!
//! Turns a directory of plain-text word lists into a [`LibraryCatalog`], plus
//! helpers for writing and merging list files.

use super::catalog::{LibraryCatalog, WordLibrary};
use crate::core::{is_alphabetic_word, normalize};
use crate::error::LoadFailure;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// File extension recognised as a word list
pub const LIST_EXTENSION: &str = "txt";

/// Load every `*.txt` file in `dir` as a library named after the file stem
///
/// A missing directory yields an empty catalog. Files that cannot be read or
/// are not valid UTF-8 are logged, recorded in [`LibraryCatalog::failures`]
/// and skipped; the rest still load.
///
/// # Examples
/// ```no_run
/// use wordle_game::library::loader::load_libraries;
///
/// let catalog = load_libraries("wordlib");
/// for name in catalog.names() {
///     println!("{name}");
/// }
/// ```
pub fn load_libraries<P: AsRef<Path>>(dir: P) -> LibraryCatalog {
    let dir = dir.as_ref();
    let mut catalog = LibraryCatalog::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Word list directory {} does not exist", dir.display());
            return catalog;
        }
        Err(e) => {
            warn!("Cannot read word list directory {}: {e}", dir.display());
            return catalog;
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|path| path.extension().is_some_and(|ext| ext == LIST_EXTENSION))
        .collect();
    paths.sort();

    for path in paths {
        let Some(name) = path.file_stem().map(|stem| stem.to_string_lossy().into_owned()) else {
            continue;
        };

        match load_from_file(&path) {
            Ok(words) => {
                debug!("Loaded library '{name}' with {} words", words.len());
                let odd = non_alphabetic_count(&words);
                if odd > 0 {
                    debug!("Library '{name}' has {odd} entries with non-letter characters");
                }
                catalog.insert(WordLibrary::new(name, words));
            }
            Err(e) => {
                let failure = LoadFailure {
                    path: path.clone(),
                    message: e.to_string(),
                };
                warn!("{failure}");
                catalog.record_failure(failure);
            }
        }
    }

    catalog
}

/// Number of entries containing anything other than letters
///
/// Such entries are kept; they can still be targets and guesses.
#[must_use]
pub fn non_alphabetic_count<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|w| !is_alphabetic_word(w.as_ref()))
        .count()
}

/// Load words from a file
///
/// Each non-blank line is trimmed and lower-cased into one word. Duplicates
/// are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Split list content into normalized words, skipping blank lines
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(normalize)
        .collect()
}

/// Convert an embedded string slice into normalized words
///
/// # Examples
/// ```
/// use wordle_game::library::loader::words_from_slice;
/// use wordle_game::library::BUILTIN;
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize(s))
        .collect()
}

/// Write a word list file, one trimmed lower-case word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_library<S, P>(words: &[S], path: P) -> io::Result<()>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let mut file = io::BufWriter::new(fs::File::create(path)?);
    for word in words {
        writeln!(file, "{}", normalize(word.as_ref()))?;
    }
    file.flush()
}

/// Merge several word list files into one sorted, deduplicated list
///
/// Inputs that do not exist are skipped. Returns the number of words written.
///
/// # Errors
///
/// Returns an I/O error if an existing input cannot be read or the output
/// cannot be written.
pub fn merge_libraries<P, Q>(inputs: &[P], output: Q) -> io::Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut merged = BTreeSet::new();
    for input in inputs {
        let input = input.as_ref();
        if !input.exists() {
            debug!("Skipping missing merge input {}", input.display());
            continue;
        }
        merged.extend(load_from_file(input)?);
    }

    let words: Vec<String> = merged.into_iter().collect();
    write_library(&words, output)?;
    Ok(words.len())
}

//! Word libraries
//!
//! Loads directories of word lists into a catalog and tracks which library
//! is currently selected.

mod catalog;
mod embedded;
pub mod loader;
mod store;

pub use catalog::{LibraryCatalog, LibraryInfo, WordLibrary};
pub use embedded::{BUILTIN, BUILTIN_COUNT, BUILTIN_NAME};
pub use store::WordStore;

/// Catalog holding only the embedded fallback library
#[must_use]
pub fn builtin_catalog() -> LibraryCatalog {
    LibraryCatalog::from_words(BUILTIN_NAME, BUILTIN)
}

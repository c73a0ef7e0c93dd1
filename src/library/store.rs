//! The word library store: a catalog plus the current selection

use super::catalog::{LibraryCatalog, LibraryInfo, WordLibrary};
use crate::error::GameError;
use log::info;

/// Catalog of libraries with at most one designated "current"
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    catalog: LibraryCatalog,
    current: Option<String>,
}

impl WordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalog(catalog: LibraryCatalog) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    /// Replace the catalog; the selection survives only if its name still exists
    ///
    /// Returns `true` if the selection survived.
    pub fn install(&mut self, catalog: LibraryCatalog) -> bool {
        self.catalog = catalog;
        if let Some(name) = &self.current
            && !self.catalog.contains(name)
        {
            info!("Library '{name}' vanished on reload; clearing selection");
            self.current = None;
        }
        self.current.is_some()
    }

    #[must_use]
    pub fn catalog(&self) -> &LibraryCatalog {
        &self.catalog
    }

    /// Designate `name` as current
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoSuchLibrary`] if the catalog has no such library;
    /// the previous selection is kept.
    pub fn select_library(&mut self, name: &str) -> Result<(), GameError> {
        if !self.catalog.contains(name) {
            return Err(GameError::NoSuchLibrary(name.to_string()));
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn current(&self) -> Option<&WordLibrary> {
        self.current.as_deref().and_then(|name| self.catalog.get(name))
    }

    /// Sorted distinct lengths in the current library; empty if none selected
    #[must_use]
    pub fn available_lengths(&self) -> Vec<usize> {
        self.current().map(WordLibrary::lengths).unwrap_or_default()
    }

    #[must_use]
    pub fn library_info(&self) -> Option<LibraryInfo> {
        self.current().map(WordLibrary::info)
    }

    /// Case-insensitive membership in the current library
    #[must_use]
    pub fn is_member(&self, word: &str) -> bool {
        self.current().is_some_and(|library| library.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordStore {
        let mut catalog = LibraryCatalog::from_words("fruit", &["apple", "pear", "fig", "mango"]);
        catalog.insert(WordLibrary::new("tools", vec!["saw".into(), "hammer".into()]));
        WordStore::with_catalog(catalog)
    }

    #[test]
    fn nothing_selected_by_default() {
        let store = store();
        assert!(store.current_name().is_none());
        assert!(store.available_lengths().is_empty());
        assert!(store.library_info().is_none());
        assert!(!store.is_member("apple"));
    }

    #[test]
    fn select_known_library() {
        let mut store = store();
        store.select_library("fruit").unwrap();
        assert_eq!(store.current_name(), Some("fruit"));
        assert_eq!(store.available_lengths(), vec![3, 4, 5]);
        assert!(store.is_member("APPLE"));
        assert!(!store.is_member("saw"));
    }

    #[test]
    fn select_unknown_library_keeps_selection() {
        let mut store = store();
        store.select_library("tools").unwrap();
        let err = store.select_library("animals").unwrap_err();
        assert_eq!(err, GameError::NoSuchLibrary("animals".into()));
        assert_eq!(store.current_name(), Some("tools"));
    }

    #[test]
    fn install_keeps_surviving_selection() {
        let mut store = store();
        store.select_library("fruit").unwrap();
        assert!(store.install(LibraryCatalog::from_words("fruit", &["kiwi"])));
        assert_eq!(store.available_lengths(), vec![4]);
    }

    #[test]
    fn install_clears_vanished_selection() {
        let mut store = store();
        store.select_library("tools").unwrap();
        assert!(!store.install(LibraryCatalog::from_words("fruit", &["kiwi"])));
        assert!(store.current_name().is_none());
    }

    #[test]
    fn library_info_is_stable() {
        let mut store = store();
        store.select_library("fruit").unwrap();
        assert_eq!(store.library_info(), store.library_info());
    }
}

//! Host settings blob
//!
//! A flat JSON object owned by the host. The session never reads it; the host
//! feeds `defaultLibrary` and `defaultLength` into the session itself.

use super::{read_json, write_json};
use crate::error::ConfigError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Legacy `snake_case` spellings and the `camelCase` keys they fold into
const SNAKE_CASE_KEYS: [(&str, &str); 4] = [
    ("default_library", "defaultLibrary"),
    ("default_length", "defaultLength"),
    ("sound_enabled", "soundEnabled"),
    ("auto_save", "autoSave"),
];

/// User preferences with defaults for every recognised key
///
/// Unknown keys are carried through `extra` so saving never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(alias = "default_library")]
    pub default_library: String,
    #[serde(alias = "default_length")]
    pub default_length: usize,
    pub theme: String,
    #[serde(alias = "sound_enabled")]
    pub sound_enabled: bool,
    #[serde(alias = "auto_save")]
    pub auto_save: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_library: "cet4".to_string(),
            default_length: 5,
            theme: "default".to_string(),
            sound_enabled: true,
            auto_save: true,
            extra: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults
    ///
    /// A missing file silently yields defaults; an unreadable or malformed one
    /// is logged first.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            warn!("{e}; using default settings");
            Self::default()
        })
    }

    /// Load settings from a JSON file; absent keys take their defaults
    ///
    /// `snake_case` keys are accepted. When both spellings of a key are
    /// present the `camelCase` one wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut raw: Value = read_json(path)?;
        if let Some(map) = raw.as_object_mut() {
            fold_snake_case_keys(map);
        }
        serde_json::from_value(raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        write_json(path.as_ref(), self)
    }
}

fn fold_snake_case_keys(map: &mut Map<String, Value>) {
    for (snake, camel) in SNAKE_CASE_KEYS {
        if let Some(value) = map.remove(snake) {
            if map.contains_key(camel) {
                debug!("Ignoring '{snake}'; '{camel}' is also set");
            } else {
                map.insert(camel.to_string(), value);
            }
        }
    }
}

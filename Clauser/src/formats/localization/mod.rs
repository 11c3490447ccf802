//! Localisation files
//!
//! The game's `.yml` localisation format is YAML-shaped but not YAML: a
//! `l_<language>:` header line followed by ` key: "value"` lines, written
//! as UTF-8 with a BOM. Parsing is line-oriented on purpose; a real YAML
//! parser chokes on the files the game itself accepts.

mod reader;
mod writer;

pub use reader::{parse_localization, read_localization};
pub use writer::write_localization;

use indexmap::IndexMap;

/// Key → localized string mapping, loaded once and read-only afterwards.
///
/// Entries keep file order so regenerated files diff cleanly.
#[derive(Debug, Clone, Default)]
pub struct LocalizationTable {
    entries: IndexMap<String, String>,
}

impl LocalizationTable {
    /// Look up a localisation key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

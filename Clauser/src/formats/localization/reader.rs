//! Localisation file reading

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::LocalizationTable;
use crate::error::Result;

lazy_static! {
    static ref LANGUAGE_HEADER_RE: Regex = Regex::new(r"^l_\w+:\s*$").expect("valid regex");
}

/// Read a localisation file from disk.
pub fn read_localization(path: &Path) -> Result<LocalizationTable> {
    let content = fs::read_to_string(path)?;
    Ok(parse_localization(&content))
}

/// Parse localisation content.
///
/// Strips a UTF-8 BOM, skips the language header and `#` comments, and
/// splits every other line at its first `:`. Lines that do not fit the
/// shape are ignored - a stray line never fails the load.
pub fn parse_localization(content: &str) -> LocalizationTable {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut table = LocalizationTable::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || LANGUAGE_HEADER_RE.is_match(line) {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_string();
            let value = value.trim().trim_matches('"').to_string();
            table.insert(key, value);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_comments_and_entries() {
        let content = "\u{feff}l_japanese:\n # a comment\n STATE_1: \"Tokyo\"\n STATE_2: \"Osaka\"\nnot a key value line\n";
        let table = parse_localization(content);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("STATE_1"), Some("Tokyo"));
        assert_eq!(table.get("STATE_2"), Some("Osaka"));
        assert_eq!(table.get("l_japanese"), None);
    }

    #[test]
    fn keeps_file_order() {
        let table = parse_localization(" B: \"2\"\n A: \"1\"\n");
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn value_keeps_inner_colons() {
        let table = parse_localization(" KEY: \"a: b\"\n");
        assert_eq!(table.get("KEY"), Some("a: b"));
    }

    #[test]
    fn missing_key_is_none_not_error() {
        let table = parse_localization("");
        assert!(table.is_empty());
        assert_eq!(table.get("ANYTHING"), None);
    }
}

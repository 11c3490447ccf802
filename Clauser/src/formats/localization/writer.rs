//! Localisation file writing

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Write a localisation file the way the game expects it: UTF-8 with BOM,
/// a `l_<language>:` header, one ` key: "value"` line per entry.
pub fn write_localization(
    path: &Path,
    language: &str,
    entries: &[(String, String)],
) -> Result<()> {
    let mut out = String::from('\u{feff}');
    out.push_str(&format!("l_{language}:\n"));
    for (key, value) in entries {
        out.push_str(&format!(" {key}: \"{value}\"\n"));
    }
    fs::write(path, out)?;
    Ok(())
}

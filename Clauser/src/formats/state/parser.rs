//! Regex field extraction for state files

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use walkdir::WalkDir;

use super::StateFile;
use crate::error::{Error, Result};
use crate::formats::province_block;

lazy_static! {
    static ref FILENAME_RE: Regex = Regex::new(r"^(\d+)-(.+)\.txt$").expect("valid regex");
    static ref OWNER_RE: Regex = Regex::new(r"owner\s*=\s*([A-Z]{3})").expect("valid regex");
    static ref MANPOWER_RE: Regex = Regex::new(r"manpower\s*=\s*(\d+)").expect("valid regex");
    static ref NAME_KEY_RE: Regex = Regex::new(r#"name\s*=\s*"(.*?)""#).expect("valid regex");
}

/// Parse one state file from disk.
pub fn parse_state_file(path: &Path) -> Result<StateFile> {
    let content = fs::read_to_string(path)?;
    parse_state_content(path, &content)
}

/// Parse state file content already in memory.
///
/// The path is still required: the state id and fallback display name come
/// from the filename, not the content.
pub fn parse_state_content(path: &Path, content: &str) -> Result<StateFile> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let capture = FILENAME_RE
        .captures(&filename)
        .ok_or_else(|| Error::InvalidStateFileName {
            path: path.to_path_buf(),
        })?;

    let id: u32 = capture[1].parse().map_err(|_| Error::StateIdOutOfRange {
        path: path.to_path_buf(),
    })?;
    let name = title_case(&capture[2]);

    let owner = OWNER_RE.captures(content).map(|c| c[1].to_string());
    let manpower = MANPOWER_RE
        .captures(content)
        .and_then(|c| c[1].parse().ok());
    let name_key = NAME_KEY_RE.captures(content).map(|c| c[1].to_string());
    let provinces = province_block::extract_province_ids(content)?;

    Ok(StateFile {
        id,
        name,
        name_key,
        owner,
        manpower,
        provinces,
        path: path.to_path_buf(),
    })
}

/// Load every state file in a directory (non-recursive).
///
/// A file that fails to parse is logged and skipped; the rest of the
/// directory still loads. Files are visited in sorted path order so the
/// result is deterministic.
pub fn load_directory(dir: &Path) -> Result<Vec<StateFile>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    let mut states = Vec::with_capacity(paths.len());
    for path in paths {
        match parse_state_file(&path) {
            Ok(state) => states.push(state),
            Err(e) => tracing::warn!("skipping state file {}: {e}", path.display()),
        }
    }
    Ok(states)
}

/// `snake_case_name` → `Snake Case Name`, matching how the files are named
/// on disk versus how they read in a list.
fn title_case(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Regex field extraction for strategic region files

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use walkdir::WalkDir;

use super::StrategicRegion;
use crate::error::{Error, Result};
use crate::formats::province_block;

lazy_static! {
    static ref ID_RE: Regex = Regex::new(r"(?m)^\s*id\s*=\s*(\d+)").expect("valid regex");
    static ref NAME_KEY_RE: Regex = Regex::new(r#"name\s*=\s*"(.*?)""#).expect("valid regex");
}

/// Parse one strategic region file from disk.
pub fn parse_region_file(path: &Path) -> Result<StrategicRegion> {
    let content = fs::read_to_string(path)?;
    parse_region_content(path, &content)
}

/// Parse strategic region content already in memory.
pub fn parse_region_content(path: &Path, content: &str) -> Result<StrategicRegion> {
    let id: u32 = ID_RE
        .captures(content)
        .and_then(|c| c[1].parse().ok())
        .ok_or_else(|| Error::MissingRegionId {
            path: path.to_path_buf(),
        })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name_key = NAME_KEY_RE.captures(content).map(|c| c[1].to_string());
    let provinces = province_block::extract_province_ids(content)?;

    Ok(StrategicRegion {
        id,
        name,
        name_key,
        provinces,
        path: path.to_path_buf(),
    })
}

/// Load every strategic region file in a directory (non-recursive).
///
/// Same failure policy as the state loader: malformed files are logged and
/// skipped, never fatal.
pub fn load_directory(dir: &Path) -> Result<Vec<StrategicRegion>> {
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

    let mut regions = Vec::with_capacity(paths.len());
    for path in paths {
        match parse_region_file(&path) {
            Ok(region) => regions.push(region),
            Err(e) => tracing::warn!("skipping region file {}: {e}", path.display()),
        }
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CONTENT: &str = r#"
strategic_region = {
	id = 140
	name = "STRATEGICREGION_140"
	provinces = {
		100 101 102 200
	}
	weather = {
		period = {
			between = { 0.0 30.0 }
		}
	}
}
"#;

    #[test]
    fn extracts_id_name_and_provinces() {
        let parsed =
            parse_region_content(Path::new("East China Sea.txt"), CONTENT).unwrap();
        assert_eq!(parsed.id, 140);
        assert_eq!(parsed.name, "East China Sea");
        assert_eq!(parsed.name_key.as_deref(), Some("STRATEGICREGION_140"));
        assert_eq!(parsed.provinces.len(), 4);
    }

    #[test]
    fn id_field_is_required() {
        let err = parse_region_content(Path::new("x.txt"), "provinces = { 1 }\n").unwrap_err();
        assert!(matches!(err, Error::MissingRegionId { .. }));
    }

    #[test]
    fn id_only_matches_line_starts() {
        // The word "id" inside other keys must not satisfy the id field.
        let content = "grid = 9\nstrategic_region = {\n\tid = 7\n}\n";
        let parsed = parse_region_content(Path::new("x.txt"), content).unwrap();
        assert_eq!(parsed.id, 7);
    }
}

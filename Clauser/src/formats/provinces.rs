//! Province definition table
//!
//! Semicolon-delimited table mapping every province id to its map color,
//! terrain and coastal flag. The first line is a header; trailing columns
//! beyond the ones named here are ignored. Ownership is not part of the
//! table - it is derived from the loaded states at query time.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::common::ProvinceId;
use crate::error::{Error, Result};

/// One row of the definition table.
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceDefinition {
    /// Province id.
    pub id: ProvinceId,
    /// Map color as an RGB triple.
    pub rgb: (u8, u8, u8),
    /// Terrain type name (e.g. `plains`, `ocean`).
    pub terrain: String,
    /// Whether the province touches a coast.
    pub coastal: bool,
}

/// Read the definition table from disk.
///
/// Malformed rows are logged and skipped so a stray line never hides the
/// rest of the map.
pub fn read_definitions(path: &Path) -> Result<Vec<ProvinceDefinition>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_definitions(&content))
}

/// Parse definition table content, skipping the header row.
pub fn parse_definitions(content: &str) -> Vec<ProvinceDefinition> {
    let mut definitions = Vec::new();
    for (index, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(index + 1, line) {
            Ok(definition) => definitions.push(definition),
            Err(e) => tracing::warn!("skipping definition row: {e}"),
        }
    }
    definitions
}

fn parse_row(line_number: usize, line: &str) -> Result<ProvinceDefinition> {
    let malformed = |message: &str| Error::MalformedDefinitionRow {
        line: line_number,
        message: message.to_string(),
    };

    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() < 6 {
        return Err(malformed("expected at least 6 columns"));
    }

    let id = ProvinceId::new(fields[0])?;
    let channel = |i: usize, name: &str| {
        fields[i]
            .parse::<u8>()
            .map_err(|_| malformed(&format!("bad {name} channel {:?}", fields[i])))
    };
    let rgb = (channel(1, "red")?, channel(2, "green")?, channel(3, "blue")?);
    let terrain = fields[4].to_string();
    let coastal = parse_bool(fields[5]).ok_or_else(|| {
        malformed(&format!("bad coastal flag {:?}", fields[5]))
    })?;

    Ok(ProvinceDefinition {
        id,
        rgb,
        terrain,
        coastal,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

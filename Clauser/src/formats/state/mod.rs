//! State history files
//!
//! One file per state, named `<id>-<snake_case_name>.txt`, containing a
//! loosely structured `state = { ... }` block. Only a handful of fields
//! matter to the toolkit: the owner tag, the manpower count, the
//! localisation name key, and the province membership.

mod parser;

pub use parser::{load_directory, parse_state_content, parse_state_file};

use std::path::PathBuf;

use serde::Serialize;

use super::common::ProvinceId;

/// Parsed view of a single state file.
///
/// Fields the file does not declare stay `None`; display fallbacks live in
/// the accessors so callers never invent "N/A" themselves.
#[derive(Debug, Clone, Serialize)]
pub struct StateFile {
    /// State id, taken from the filename prefix.
    pub id: u32,
    /// Human-readable name derived from the filename.
    pub name: String,
    /// Localisation key from `name = "KEY"`, if declared.
    pub name_key: Option<String>,
    /// Owning country tag, if declared.
    pub owner: Option<String>,
    /// Manpower count, if declared.
    pub manpower: Option<u64>,
    /// Province membership, in file order.
    pub provinces: Vec<ProvinceId>,
    /// The backing file.
    pub path: PathBuf,
}

impl StateFile {
    /// Owner tag for display; absent owners render as `N/A`.
    pub fn owner_display(&self) -> &str {
        self.owner.as_deref().unwrap_or("N/A")
    }

    /// Manpower for display; absent manpower renders as `N/A`.
    pub fn manpower_display(&self) -> String {
        self.manpower
            .map_or_else(|| "N/A".to_string(), |m| m.to_string())
    }

    /// Whether the given province id is a member of this state.
    pub fn contains_province(&self, id: &ProvinceId) -> bool {
        self.provinces.contains(id)
    }
}

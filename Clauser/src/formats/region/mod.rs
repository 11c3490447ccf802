//! Strategic region files
//!
//! One file per region, named after the region rather than its id; the id
//! lives inside as an `id = N` field. Regions group provinces for weather
//! and air combat, independently of state ownership, and their province
//! blocks must follow province transfers between states.

mod parser;

pub use parser::{load_directory, parse_region_content, parse_region_file};

use std::path::PathBuf;

use serde::Serialize;

use super::common::ProvinceId;

/// Parsed view of a single strategic region file.
#[derive(Debug, Clone, Serialize)]
pub struct StrategicRegion {
    /// Region id from the internal `id = N` field.
    pub id: u32,
    /// Name derived from the filename.
    pub name: String,
    /// Localisation key from `name = "KEY"`, if declared.
    pub name_key: Option<String>,
    /// Province membership, in file order.
    pub provinces: Vec<ProvinceId>,
    /// The backing file.
    pub path: PathBuf,
}

impl StrategicRegion {
    /// Whether the given province id is a member of this region.
    pub fn contains_province(&self, id: &ProvinceId) -> bool {
        self.provinces.contains(id)
    }
}

//! In-memory catalog of a mod's states, regions and provinces
//!
//! The catalog is rebuilt by a full directory rescan - at startup, on
//! demand, and after every successful transfer. There is no incremental
//! invalidation to get wrong: the files on disk are the single source of
//! truth and the catalog is only ever a snapshot of them. All mutation of
//! the underlying files goes through [`crate::operations`]; nothing here
//! hands out a mutable list.

mod filter;
mod sort;

pub use filter::{FieldQuery, FilterField, filter_states, matches};
pub use sort::{SortKey, sort_states};

use serde::Serialize;

use clauser::formats::ProvinceId;
use clauser::formats::localization::{LocalizationTable, read_localization};
use clauser::formats::provinces::{ProvinceDefinition, read_definitions};
use clauser::formats::region::{self, StrategicRegion};
use clauser::formats::state::{self, StateFile};

use crate::config::Config;
use crate::error::Result;

/// A state plus its resolved display name.
#[derive(Debug, Clone, Serialize)]
pub struct StateEntry {
    /// The parsed state file.
    #[serde(flatten)]
    pub file: StateFile,
    /// Localized display name: the localisation value for the state's
    /// name key, a `<KEY not found>` marker when the key is missing from
    /// the table, or the filename-derived name when the state has no key.
    pub localized_name: String,
}

/// A province definition joined with its current owner.
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceRecord {
    #[serde(flatten)]
    pub definition: ProvinceDefinition,
    /// State whose province list contains this id, if any.
    pub owning_state: Option<u32>,
}

/// Snapshot of everything the toolkit knows about the mod.
#[derive(Debug, Default)]
pub struct Catalog {
    states: Vec<StateEntry>,
    regions: Vec<StrategicRegion>,
    definitions: Vec<ProvinceDefinition>,
    localization: LocalizationTable,
}

impl Catalog {
    /// Load the catalog from the directories named in the config.
    ///
    /// The localisation file and the definition table are optional inputs:
    /// when missing, names fall back to filenames and the province view is
    /// empty, with a warning either way. Individual malformed state or
    /// region files are skipped by the loaders.
    pub fn load(config: &Config) -> Result<Self> {
        let localization = match read_localization(&config.paths.localisation) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    "no localisation loaded from {}: {e}",
                    config.paths.localisation.display()
                );
                LocalizationTable::default()
            }
        };

        if !config.paths.states.is_dir() {
            tracing::warn!(
                "state directory {} not found",
                config.paths.states.display()
            );
        }
        let states: Vec<StateEntry> = state::load_directory(&config.paths.states)?
            .into_iter()
            .map(|file| StateEntry {
                localized_name: resolve_name(&file, &localization),
                file,
            })
            .collect();

        let regions = if config.paths.strategic_regions.is_dir() {
            region::load_directory(&config.paths.strategic_regions)?
        } else {
            tracing::warn!(
                "strategic region directory {} not found",
                config.paths.strategic_regions.display()
            );
            Vec::new()
        };

        let definitions = if config.paths.province_definitions.is_file() {
            read_definitions(&config.paths.province_definitions)?
        } else {
            tracing::warn!(
                "province definition table {} not found",
                config.paths.province_definitions.display()
            );
            Vec::new()
        };

        tracing::debug!(
            "catalog loaded: {} states, {} regions, {} province definitions, {} localisation keys",
            states.len(),
            regions.len(),
            definitions.len(),
            localization.len()
        );

        Ok(Self {
            states,
            regions,
            definitions,
            localization,
        })
    }

    /// Throw the snapshot away and rescan everything.
    pub fn reload(&mut self, config: &Config) -> Result<()> {
        *self = Self::load(config)?;
        Ok(())
    }

    /// All loaded states, in current sort order.
    pub fn states(&self) -> &[StateEntry] {
        &self.states
    }

    /// All loaded strategic regions.
    pub fn regions(&self) -> &[StrategicRegion] {
        &self.regions
    }

    /// The localisation table.
    pub fn localization(&self) -> &LocalizationTable {
        &self.localization
    }

    /// Look up one state by id.
    pub fn state(&self, id: u32) -> Option<&StateEntry> {
        self.states.iter().find(|e| e.file.id == id)
    }

    /// The strategic region currently listing a province.
    pub fn region_of(&self, id: &ProvinceId) -> Option<&StrategicRegion> {
        self.regions.iter().find(|r| r.contains_province(id))
    }

    /// The state currently listing a province.
    pub fn owner_of(&self, id: &ProvinceId) -> Option<&StateEntry> {
        self.states.iter().find(|e| e.file.contains_province(id))
    }

    /// Sort the state list in place.
    pub fn sort(&mut self, key: SortKey, ascending: bool) {
        sort_states(&mut self.states, key, ascending);
    }

    /// States matching every query.
    pub fn filter(&self, queries: &[FieldQuery], exact: bool) -> Vec<&StateEntry> {
        filter_states(&self.states, queries, exact)
    }

    /// Derived province records: the definition table joined with the
    /// owning state of each id. Recomputed on every call; nothing caches
    /// it.
    pub fn provinces(&self) -> Vec<ProvinceRecord> {
        self.definitions
            .iter()
            .map(|definition| ProvinceRecord {
                owning_state: self.owner_of(&definition.id).map(|e| e.file.id),
                definition: definition.clone(),
            })
            .collect()
    }
}

fn resolve_name(file: &StateFile, localization: &LocalizationTable) -> String {
    match &file.name_key {
        Some(key) => localization
            .get(key)
            .map_or_else(|| format!("<{key} not found>"), ToString::to_string),
        None => file.name.clone(),
    }
}

//! Configuration manifest (statekit.toml)
//!
//! Every field has a default matching the conventional layout of a mod
//! checkout, so running from a mod's root directory needs no config file
//! at all. Paths support `~` expansion.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::SortKey;
use crate::error::{Error, Result};

/// Name of the manifest searched for in the working directory and in the
/// platform config directory.
pub const CONFIG_FILE_NAME: &str = "statekit.toml";

fn default_states_dir() -> PathBuf {
    PathBuf::from("history/states")
}

fn default_regions_dir() -> PathBuf {
    PathBuf::from("map/strategicregions")
}

fn default_localisation_file() -> PathBuf {
    PathBuf::from("localisation/english/state_names_l_english.yml")
}

fn default_definitions_file() -> PathBuf {
    PathBuf::from("map/definition.csv")
}

fn default_true() -> bool {
    true
}

/// The full manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Where the mod files live, relative to the working directory unless
/// absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    #[serde(default = "default_states_dir")]
    pub states: PathBuf,
    #[serde(default = "default_regions_dir")]
    pub strategic_regions: PathBuf,
    #[serde(default = "default_localisation_file")]
    pub localisation: PathBuf,
    #[serde(default = "default_definitions_file")]
    pub province_definitions: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            states: default_states_dir(),
            strategic_regions: default_regions_dir(),
            localisation: default_localisation_file(),
            province_definitions: default_definitions_file(),
        }
    }
}

/// Default presentation of the state list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default = "default_true")]
    pub ascending: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            sort_key: SortKey::default(),
            ascending: true,
        }
    }
}

impl Config {
    /// Load the manifest.
    ///
    /// An explicit path must exist; otherwise `./statekit.toml` is tried,
    /// then `<config dir>/statekit/statekit.toml`, and finally the
    /// defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::ConfigNotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::from_file(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global = config_dir.join("statekit").join(CONFIG_FILE_NAME);
            if global.exists() {
                return Self::from_file(&global);
            }
        }

        Ok(Self::default())
    }

    /// Parse a manifest file and expand `~` in its paths.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.paths.expand();
        Ok(config)
    }
}

impl Paths {
    fn expand(&mut self) {
        for path in [
            &mut self.states,
            &mut self.strategic_regions,
            &mut self.localisation,
            &mut self.province_definitions,
        ] {
            let raw = path.to_string_lossy();
            let expanded = shellexpand::tilde(raw.as_ref()).into_owned();
            *path = PathBuf::from(expanded);
        }
    }
}

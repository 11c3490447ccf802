//! Transfer orchestration

use clauser::formats::ProvinceId;
use clauser::formats::region::StrategicRegion;
use clauser::formats::state::StateFile;
use clauser::transfer::{self, TransferOutcome};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};

/// A province transfer as requested by the user.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// State giving up the provinces.
    pub source: u32,
    /// State receiving them.
    pub target: u32,
    /// The provinces to move.
    pub provinces: Vec<ProvinceId>,
    /// Plan only; write nothing.
    pub dry_run: bool,
}

/// Run a transfer against the catalog.
///
/// The engine works on copies of the loaded entities; after a real (non
/// dry-run) transfer the catalog is reloaded from disk wholesale, so
/// whatever the engine managed to persist is what the caller sees next -
/// including the aftermath of partial failures, which are reported in the
/// outcome rather than rolled back.
pub fn transfer_provinces(
    catalog: &mut Catalog,
    config: &Config,
    request: &TransferRequest,
) -> Result<TransferOutcome> {
    // Friendlier failure than the engine's when the ids are unknown.
    if catalog.state(request.source).is_none() {
        return Err(Error::StateNotFound(request.source));
    }
    if catalog.state(request.target).is_none() {
        return Err(Error::StateNotFound(request.target));
    }

    let mut states: Vec<StateFile> =
        catalog.states().iter().map(|e| e.file.clone()).collect();
    let mut regions: Vec<StrategicRegion> = catalog.regions().to_vec();

    let outcome = transfer::transfer_provinces(
        &mut states,
        &mut regions,
        request.source,
        request.target,
        &request.provinces,
        request.dry_run,
    )?;

    if !request.dry_run {
        catalog.reload(config)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn fixture(root: &Path) -> Config {
        let states = root.join("states");
        let regions = root.join("regions");
        fs::create_dir_all(&states).unwrap();
        fs::create_dir_all(&regions).unwrap();
        fs::write(
            states.join("322-test_region.txt"),
            "owner = JAP\nprovinces = { 100 101 102 }\n",
        )
        .unwrap();
        fs::write(
            states.join("400-target_land.txt"),
            "owner = MAN\nprovinces = { 205 }\n",
        )
        .unwrap();
        fs::write(regions.join("A.txt"), "id = 1\nprovinces = { 100 101 102 }\n").unwrap();
        fs::write(regions.join("B.txt"), "id = 2\nprovinces = { 205 }\n").unwrap();

        let mut config = Config::default();
        config.paths.states = states;
        config.paths.strategic_regions = regions;
        config.paths.localisation = root.join("missing.yml");
        config.paths.province_definitions = root.join("missing.csv");
        config
    }

    fn ids(values: &[&str]) -> Vec<ProvinceId> {
        values.iter().map(|v| ProvinceId::new(*v).unwrap()).collect()
    }

    #[test]
    fn transfer_reloads_the_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        let mut catalog = Catalog::load(&config).unwrap();

        let request = TransferRequest {
            source: 322,
            target: 400,
            provinces: ids(&["101"]),
            dry_run: false,
        };
        let outcome = transfer_provinces(&mut catalog, &config, &request).unwrap();
        assert!(outcome.failed_writes.is_empty());

        // The reloaded catalog reflects the rewritten files.
        let source = catalog.state(322).unwrap();
        let target = catalog.state(400).unwrap();
        assert!(!source.file.contains_province(&request.provinces[0]));
        assert!(target.file.contains_province(&request.provinces[0]));
        assert_eq!(catalog.region_of(&request.provinces[0]).unwrap().id, 2);
    }

    #[test]
    fn dry_run_leaves_catalog_and_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        let mut catalog = Catalog::load(&config).unwrap();

        let request = TransferRequest {
            source: 322,
            target: 400,
            provinces: ids(&["101"]),
            dry_run: true,
        };
        let outcome = transfer_provinces(&mut catalog, &config, &request).unwrap();
        assert_eq!(outcome.moved.len(), 1);
        assert!(outcome.files_written.is_empty());

        let source = catalog.state(322).unwrap();
        assert!(source.file.contains_province(&request.provinces[0]));
    }

    #[test]
    fn unknown_states_fail_before_the_engine_runs() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        let mut catalog = Catalog::load(&config).unwrap();

        let request = TransferRequest {
            source: 999,
            target: 400,
            provinces: ids(&["101"]),
            dry_run: false,
        };
        let err = transfer_provinces(&mut catalog, &config, &request).unwrap_err();
        assert!(matches!(err, Error::StateNotFound(999)));
    }
}

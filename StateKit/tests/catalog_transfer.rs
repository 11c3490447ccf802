//! Catalog-level walkthrough of the browse -> transfer -> reload loop.

use std::fs;
use std::path::Path;

use clauser::formats::ProvinceId;
use statekit::catalog::{Catalog, FieldQuery, FilterField, SortKey};
use statekit::config::Config;
use statekit::operations::{TransferRequest, transfer_provinces};

fn write_mod_tree(root: &Path) -> Config {
    let states = root.join("history").join("states");
    let regions = root.join("map").join("strategicregions");
    fs::create_dir_all(&states).unwrap();
    fs::create_dir_all(&regions).unwrap();

    fs::write(
        states.join("322-test_region.txt"),
        "state = {\n\tid=322\n\tname = \"STATE_322\"\n\towner = JAP\n\tmanpower = 900\n\tprovinces = { 100 101 102 }\n}\n",
    )
    .unwrap();
    fs::write(
        states.join("400-frontier.txt"),
        "state = {\n\tid=400\n\tname = \"STATE_400\"\n\towner = MAN\n\tmanpower = 70\n\tprovinces = { 205 301 }\n}\n",
    )
    .unwrap();
    fs::write(
        regions.join("Islands.txt"),
        "id = 1\nprovinces = { 100 101 102 }\n",
    )
    .unwrap();
    fs::write(
        regions.join("Continent.txt"),
        "id = 2\nprovinces = { 205 301 }\n",
    )
    .unwrap();

    let localisation = root.join("state_names_l_english.yml");
    fs::write(
        &localisation,
        "\u{feff}l_english:\n STATE_322: \"Test Region\"\n STATE_400: \"Frontier\"\n",
    )
    .unwrap();

    let mut config = Config::default();
    config.paths.states = states;
    config.paths.strategic_regions = regions;
    config.paths.localisation = localisation;
    config.paths.province_definitions = root.join("missing.csv");
    config
}

#[test]
fn browse_transfer_reload() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_mod_tree(dir.path());
    let mut catalog = Catalog::load(&config).unwrap();

    // Browse: sort by manpower descending puts the bigger state first.
    catalog.sort(SortKey::Manpower, false);
    assert_eq!(catalog.states()[0].file.id, 322);

    // Search: owner filter narrows the list.
    let owned = catalog.filter(&[FieldQuery::new(FilterField::Owner, "jap")], true);
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].localized_name, "Test Region");

    // Transfer province 101 as in the state file scenario.
    let request = TransferRequest {
        source: 322,
        target: 400,
        provinces: vec![ProvinceId::new("101").unwrap()],
        dry_run: false,
    };
    let outcome = transfer_provinces(&mut catalog, &config, &request).unwrap();
    assert!(outcome.failed_writes.is_empty());
    assert_eq!(outcome.region_moves.len(), 1);

    // The reloaded catalog matches on-disk truth.
    let source: Vec<&str> = catalog
        .state(322)
        .unwrap()
        .file
        .provinces
        .iter()
        .map(ProvinceId::as_str)
        .collect();
    let target: Vec<&str> = catalog
        .state(400)
        .unwrap()
        .file
        .provinces
        .iter()
        .map(ProvinceId::as_str)
        .collect();
    assert_eq!(source, vec!["100", "102"]);
    assert_eq!(target, vec!["101", "205", "301"]);

    // And so do the region files.
    let id = ProvinceId::new("101").unwrap();
    assert_eq!(catalog.region_of(&id).unwrap().id, 2);
}

//! `statekit check` - consistency scan over the mod tree
//!
//! Parses every file itself (rather than going through the catalog) so it
//! can name the files the loaders would silently skip.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use console::style;
use walkdir::WalkDir;

use clauser::formats::provinces::read_definitions;
use clauser::formats::region::{StrategicRegion, parse_region_file};
use clauser::formats::state::{StateFile, parse_state_file};

use crate::cli::progress::{self, LOOKING_GLASS};
use crate::config::Config;

pub fn execute(config_path: Option<&Path>) -> anyhow::Result<()> {
    let started = Instant::now();
    let config = Config::load(config_path)?;

    progress::print_step(1, 2, LOOKING_GLASS, "Scanning state and region files...");
    let state_paths = txt_files(&config.paths.states);
    let region_paths = txt_files(&config.paths.strategic_regions);

    let bar =
        progress::scan_bar((state_paths.len() + region_paths.len()) as u64, "Parsing");

    let mut states: Vec<StateFile> = Vec::new();
    let mut regions: Vec<StrategicRegion> = Vec::new();
    let mut parse_failures: Vec<(PathBuf, String)> = Vec::new();

    for path in &state_paths {
        match parse_state_file(path) {
            Ok(state) => states.push(state),
            Err(e) => parse_failures.push((path.clone(), e.to_string())),
        }
        bar.inc(1);
    }
    for path in &region_paths {
        match parse_region_file(path) {
            Ok(region) => regions.push(region),
            Err(e) => parse_failures.push((path.clone(), e.to_string())),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    progress::print_step(2, 2, LOOKING_GLASS, "Cross-checking memberships...");

    // A province may be listed by at most one state and one region.
    let duplicate_state_owners = duplicates(states.iter().map(|s| (s.id, &s.provinces)));
    let duplicate_region_owners = duplicates(regions.iter().map(|r| (r.id, &r.provinces)));

    let missing_definitions = if config.paths.province_definitions.is_file() {
        let known: Vec<String> = read_definitions(&config.paths.province_definitions)?
            .into_iter()
            .map(|d| d.id.as_str().to_string())
            .collect();
        let mut missing: Vec<String> = states
            .iter()
            .flat_map(|s| &s.provinces)
            .filter(|p| !known.iter().any(|k| k == p.as_str()))
            .map(|p| p.as_str().to_string())
            .collect();
        missing.sort_by_key(|p| p.parse::<u64>().unwrap_or(u64::MAX));
        missing.dedup();
        Some(missing)
    } else {
        None
    };

    let ownerless: Vec<u32> = states
        .iter()
        .filter(|s| s.owner.is_none())
        .map(|s| s.id)
        .collect();

    // Report.
    println!(
        "Parsed {} states and {} regions",
        states.len(),
        regions.len()
    );
    let mut findings = 0;

    if !parse_failures.is_empty() {
        findings += parse_failures.len();
        println!("\n{}", style("Files skipped by the loaders:").bold());
        for (path, message) in &parse_failures {
            println!("  {}: {}", path.display(), message);
        }
    }
    if !duplicate_state_owners.is_empty() {
        findings += duplicate_state_owners.len();
        println!("\n{}", style("Provinces listed by more than one state:").bold());
        for (province, owners) in &duplicate_state_owners {
            println!("  {province}: states {owners:?}");
        }
    }
    if !duplicate_region_owners.is_empty() {
        findings += duplicate_region_owners.len();
        println!(
            "\n{}",
            style("Provinces listed by more than one strategic region:").bold()
        );
        for (province, owners) in &duplicate_region_owners {
            println!("  {province}: regions {owners:?}");
        }
    }
    match &missing_definitions {
        Some(missing) if !missing.is_empty() => {
            findings += missing.len();
            println!(
                "\n{}",
                style("State provinces missing from the definition table:").bold()
            );
            println!("  {}", missing.join(", "));
        }
        Some(_) => {}
        None => println!("\n(definition table not found; province cross-check skipped)"),
    }
    if !ownerless.is_empty() {
        // Informational: sea and uncolonized states legitimately have no
        // owner, so this never counts as a finding.
        println!("\n{}", style("States without an owner tag:").bold());
        println!("  {ownerless:?}");
    }

    if findings == 0 {
        println!("\n{}", style("No consistency problems found").green());
    }
    progress::print_done(started.elapsed());
    Ok(())
}

fn txt_files(dir: &Path) -> Vec<PathBuf> {
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
    paths
}

/// Provinces listed under more than one id, with the ids that list them.
fn duplicates<'a, I>(lists: I) -> Vec<(String, Vec<u32>)>
where
    I: Iterator<Item = (u32, &'a Vec<clauser::formats::ProvinceId>)>,
{
    let mut owners: HashMap<String, Vec<u32>> = HashMap::new();
    for (id, provinces) in lists {
        for province in provinces {
            owners
                .entry(province.as_str().to_string())
                .or_default()
                .push(id);
        }
    }
    let mut out: Vec<(String, Vec<u32>)> = owners
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .collect();
    out.sort_by_key(|(province, _)| province.parse::<u64>().unwrap_or(u64::MAX));
    out
}

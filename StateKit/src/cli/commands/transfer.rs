//! `statekit transfer` - move provinces between states

use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use console::style;

use clauser::formats::ProvinceId;

use crate::catalog::Catalog;
use crate::cli::progress::{self, DISK, LOOKING_GLASS};
use crate::config::Config;
use crate::operations::{TransferRequest, transfer_provinces};

pub fn execute(
    config_path: Option<&Path>,
    from: u32,
    to: u32,
    provinces: &[String],
    dry_run: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let selection = provinces
        .iter()
        .map(|raw| ProvinceId::from_str(raw.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    progress::print_step(1, 2, LOOKING_GLASS, "Loading catalog...");
    let config = Config::load(config_path)?;
    let mut catalog = Catalog::load(&config)?;

    progress::print_step(
        2,
        2,
        DISK,
        if dry_run {
            "Planning transfer (dry run)..."
        } else {
            "Transferring provinces..."
        },
    );
    let request = TransferRequest {
        source: from,
        target: to,
        provinces: selection,
        dry_run,
    };
    let outcome = transfer_provinces(&mut catalog, &config, &request)?;

    let moved: Vec<&str> = outcome.moved.iter().map(ProvinceId::as_str).collect();
    println!(
        "Moved {} province(s) from state {} to state {}: {}",
        outcome.moved.len(),
        outcome.source,
        outcome.target,
        moved.join(", ")
    );
    for region_move in &outcome.region_moves {
        println!(
            "  province {} follows: region {} -> region {}",
            region_move.province, region_move.from_region, region_move.to_region
        );
    }

    if dry_run {
        println!("\n(Dry run - no changes made)");
        return Ok(());
    }

    for path in &outcome.files_written {
        println!("  rewrote {}", path.display());
    }
    for (path, message) in &outcome.failed_writes {
        println!(
            "  {} {}: {}",
            style("FAILED").red().bold(),
            path.display(),
            message
        );
    }
    if !outcome.failed_writes.is_empty() {
        println!(
            "{}",
            style(
                "Some files were not rewritten; the mod tree may be inconsistent. \
                 Fix the files above and re-run `statekit check`."
            )
            .yellow()
        );
    }

    progress::print_done(started.elapsed());
    Ok(())
}

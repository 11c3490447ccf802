//! `statekit regions` - strategic region listing

use std::path::Path;

use console::style;

use crate::catalog::Catalog;
use crate::config::Config;

pub fn execute(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let catalog = Catalog::load(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.regions())?);
        return Ok(());
    }

    println!(
        "{}",
        style(format!("{:>6}  {:<32}  {:>10}", "ID", "NAME", "PROVINCES")).bold()
    );
    for region in catalog.regions() {
        println!(
            "{:>6}  {:<32}  {:>10}",
            region.id,
            region.name,
            region.provinces.len()
        );
    }
    Ok(())
}

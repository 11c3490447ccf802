//! `statekit show` - one state in full

use std::path::Path;

use console::style;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Error;

pub fn execute(config_path: Option<&Path>, id: u32, json: bool) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let catalog = Catalog::load(&config)?;

    let entry = catalog.state(id).ok_or(Error::StateNotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    println!("{} {}", style("State").bold(), entry.file.id);
    println!("  Name:       {}", entry.file.name);
    println!("  Localized:  {}", entry.localized_name);
    if let Some(key) = &entry.file.name_key {
        println!("  Name key:   {key}");
    }
    println!("  Owner:      {}", entry.file.owner_display());
    println!("  Manpower:   {}", entry.file.manpower_display());
    println!("  File:       {}", entry.file.path.display());
    println!("  Provinces ({}):", entry.file.provinces.len());
    for province in &entry.file.provinces {
        match catalog.region_of(province) {
            Some(region) => println!("    {province}  (region {} - {})", region.id, region.name),
            None => println!("    {province}"),
        }
    }
    Ok(())
}

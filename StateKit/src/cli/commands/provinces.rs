//! `statekit provinces` - the derived province view

use std::path::Path;

use console::style;

use crate::catalog::Catalog;
use crate::config::Config;

pub fn execute(
    config_path: Option<&Path>,
    state: Option<u32>,
    coastal: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let catalog = Catalog::load(&config)?;

    let records: Vec<_> = catalog
        .provinces()
        .into_iter()
        .filter(|r| state.is_none_or(|id| r.owning_state == Some(id)))
        .filter(|r| !coastal || r.definition.coastal)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{}",
        style(format!(
            "{:>8}  {:<13}  {:<12}  {:<7}  {:>6}",
            "ID", "RGB", "TERRAIN", "COASTAL", "STATE"
        ))
        .bold()
    );
    for record in &records {
        let (r, g, b) = record.definition.rgb;
        println!(
            "{:>8}  {:<13}  {:<12}  {:<7}  {:>6}",
            record.definition.id,
            format!("({r},{g},{b})"),
            record.definition.terrain,
            if record.definition.coastal { "yes" } else { "no" },
            record
                .owning_state
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        );
    }
    println!("\n{} provinces", records.len());
    Ok(())
}

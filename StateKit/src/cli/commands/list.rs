//! `statekit list` - the state browser

use std::path::Path;

use console::style;

use crate::catalog::{Catalog, FieldQuery, FilterField, SortKey, StateEntry};
use crate::config::Config;

/// Everything the list command accepts.
pub struct ListOptions {
    pub sort: Option<SortKey>,
    pub descending: bool,
    pub id: Option<String>,
    pub name: Option<String>,
    pub localized: Option<String>,
    pub owner: Option<String>,
    pub manpower: Option<String>,
    pub province: Option<String>,
    pub exact: bool,
    pub json: bool,
}

impl ListOptions {
    fn queries(&self) -> Vec<FieldQuery> {
        let columns = [
            (FilterField::Id, &self.id),
            (FilterField::Name, &self.name),
            (FilterField::LocalizedName, &self.localized),
            (FilterField::Owner, &self.owner),
            (FilterField::Manpower, &self.manpower),
            (FilterField::Provinces, &self.province),
        ];
        columns
            .into_iter()
            .filter_map(|(field, query)| {
                query
                    .as_deref()
                    .map(str::trim)
                    .filter(|q| !q.is_empty())
                    .map(|q| FieldQuery::new(field, q))
            })
            .collect()
    }
}

pub fn execute(config_path: Option<&Path>, options: ListOptions) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let mut catalog = Catalog::load(&config)?;

    let key = options.sort.unwrap_or(config.display.sort_key);
    let ascending = if options.descending {
        false
    } else {
        config.display.ascending
    };
    catalog.sort(key, ascending);

    let queries = options.queries();
    let matches = catalog.filter(&queries, options.exact);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    print_table(&matches);
    if !queries.is_empty() {
        println!(
            "\n{} of {} states match",
            matches.len(),
            catalog.states().len()
        );
    }
    Ok(())
}

fn print_table(entries: &[&StateEntry]) {
    println!(
        "{}",
        style(format!(
            "{:>6}  {:<24}  {:<24}  {:<5}  {:>12}",
            "ID", "NAME", "LOCALIZED", "OWNER", "MANPOWER"
        ))
        .bold()
    );
    for entry in entries {
        println!(
            "{:>6}  {:<24}  {:<24}  {:<5}  {:>12}",
            entry.file.id,
            truncate(&entry.file.name, 24),
            truncate(&entry.localized_name, 24),
            entry.file.owner_display(),
            entry.file.manpower_display(),
        );
    }
}

/// Truncate a cell for display
fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

//! Filtering the state list
//!
//! One optional query per column, AND-combined, in two modes: exact
//! (case-normalized equality) and substring (case-insensitive
//! containment). Numeric columns only ever match numeric queries; a
//! non-numeric query against them matches nothing rather than erroring.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StateEntry;

/// Column a state query applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterField {
    Id,
    Name,
    LocalizedName,
    Owner,
    Manpower,
    Provinces,
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(FilterField::Id),
            "name" => Ok(FilterField::Name),
            "localized-name" | "localized_name" | "localized" => Ok(FilterField::LocalizedName),
            "owner" => Ok(FilterField::Owner),
            "manpower" => Ok(FilterField::Manpower),
            "provinces" | "province" => Ok(FilterField::Provinces),
            _ => Err(format!(
                "Invalid filter field '{s}'. Valid values: id, name, localized-name, owner, manpower, provinces"
            )),
        }
    }
}

/// A single column query.
#[derive(Debug, Clone)]
pub struct FieldQuery {
    pub field: FilterField,
    pub query: String,
}

impl FieldQuery {
    pub fn new(field: FilterField, query: impl Into<String>) -> Self {
        Self {
            field,
            query: query.into(),
        }
    }
}

/// Keep the entries matching every query.
pub fn filter_states<'a>(
    entries: &'a [StateEntry],
    queries: &[FieldQuery],
    exact: bool,
) -> Vec<&'a StateEntry> {
    entries
        .iter()
        .filter(|entry| queries.iter().all(|q| matches(entry, q, exact)))
        .collect()
}

/// Whether one entry satisfies one column query.
pub fn matches(entry: &StateEntry, query: &FieldQuery, exact: bool) -> bool {
    let q = query.query.trim();
    match query.field {
        FilterField::Id => numeric_match(u64::from(entry.file.id), q, exact),
        FilterField::Manpower => entry
            .file
            .manpower
            .is_some_and(|m| numeric_match(m, q, exact)),
        FilterField::Owner => {
            let owner = entry.file.owner_display().to_uppercase();
            let q = q.to_uppercase();
            if exact { owner == q } else { owner.contains(&q) }
        }
        FilterField::Name => caseless_match(&entry.file.name, q, exact),
        FilterField::LocalizedName => caseless_match(&entry.localized_name, q, exact),
        // Quirk kept from the original tool: exact mode tests list
        // membership, substring mode tests containment per id, so the
        // query "1" substring-matches provinces 10, 11, 102, ...
        FilterField::Provinces => {
            if exact {
                entry.file.provinces.iter().any(|p| p.as_str() == q)
            } else {
                entry.file.provinces.iter().any(|p| p.as_str().contains(q))
            }
        }
    }
}

fn numeric_match(value: u64, query: &str, exact: bool) -> bool {
    if query.is_empty() || !query.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if exact {
        query.parse::<u64>().is_ok_and(|q| q == value)
    } else {
        value.to_string().contains(query)
    }
}

fn caseless_match(value: &str, query: &str, exact: bool) -> bool {
    let value = value.to_lowercase();
    let query = query.to_lowercase();
    if exact {
        value == query
    } else {
        value.contains(&query)
    }
}

//! Sorting the state list

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StateEntry;

/// Column a state list can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    LocalizedName,
    Owner,
    Manpower,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "localized-name" | "localized_name" | "localized" => Ok(SortKey::LocalizedName),
            "owner" => Ok(SortKey::Owner),
            "manpower" => Ok(SortKey::Manpower),
            _ => Err(format!(
                "Invalid sort key '{s}'. Valid values: id, name, localized-name, owner, manpower"
            )),
        }
    }
}

/// Stable sort by the given column.
///
/// Numeric columns compare numerically (absent manpower sorts below every
/// number), string columns case-insensitively. Descending reverses the
/// comparison but keeps ties in their original relative order, matching
/// how a stable reverse-sort behaves everywhere else.
pub fn sort_states(entries: &mut [StateEntry], key: SortKey, ascending: bool) {
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &StateEntry, b: &StateEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.file.id.cmp(&b.file.id),
        SortKey::Name => caseless(&a.file.name, &b.file.name),
        SortKey::LocalizedName => caseless(&a.localized_name, &b.localized_name),
        SortKey::Owner => a.file.owner_display().cmp(b.file.owner_display()),
        SortKey::Manpower => a.file.manpower.cmp(&b.file.manpower),
    }
}

fn caseless(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clauser::formats::state::parse_state_content;

    use super::*;

    fn entry(id: u32, name: &str, manpower: Option<u64>, localized: &str) -> StateEntry {
        let content = manpower.map_or(String::new(), |m| format!("manpower = {m}\n"));
        let file = parse_state_content(
            Path::new(&format!("{id}-{name}.txt")),
            &content,
        )
        .unwrap();
        StateEntry {
            file,
            localized_name: localized.to_string(),
        }
    }

    fn id_order(entries: &[StateEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.file.id).collect()
    }

    #[test]
    fn sorts_manpower_numerically_with_absent_last_ascending_first() {
        let mut entries = vec![
            entry(1, "a", Some(900), "A"),
            entry(2, "b", None, "B"),
            entry(3, "c", Some(21), "C"),
        ];
        sort_states(&mut entries, SortKey::Manpower, true);
        assert_eq!(id_order(&entries), vec![2, 3, 1]);
    }

    #[test]
    fn string_sort_is_case_insensitive() {
        let mut entries = vec![
            entry(1, "zulu", None, "zulu"),
            entry(2, "Alpha", None, "Alpha"),
            entry(3, "mike", None, "mike"),
        ];
        sort_states(&mut entries, SortKey::LocalizedName, true);
        assert_eq!(id_order(&entries), vec![2, 3, 1]);
    }

    #[test]
    fn reverse_of_distinct_keys_is_exact_reverse() {
        let mut ascending = vec![
            entry(3, "c", Some(3), "C"),
            entry(1, "a", Some(1), "A"),
            entry(2, "b", Some(2), "B"),
        ];
        let mut descending = ascending.clone();
        sort_states(&mut ascending, SortKey::Id, true);
        sort_states(&mut descending, SortKey::Id, false);

        let mut reversed = id_order(&ascending);
        reversed.reverse();
        assert_eq!(id_order(&descending), reversed);
    }

    #[test]
    fn ties_keep_original_relative_order_both_directions() {
        let mut entries = vec![
            entry(10, "x", Some(5), "X"),
            entry(11, "y", Some(5), "Y"),
            entry(12, "z", Some(1), "Z"),
        ];
        sort_states(&mut entries, SortKey::Manpower, true);
        assert_eq!(id_order(&entries), vec![12, 10, 11]);

        sort_states(&mut entries, SortKey::Manpower, false);
        // 10 and 11 tie on manpower and stay in their current order.
        assert_eq!(id_order(&entries), vec![10, 11, 12]);
    }
}

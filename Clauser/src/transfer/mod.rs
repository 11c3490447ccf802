//! Province transfer engine
//!
//! Moves a set of provinces from one state to another, drags the affected
//! strategic region memberships along, and rewrites the province block of
//! every touched file. Persistence is deliberately per-file and
//! non-transactional: a write failure is recorded and the remaining files
//! are still written, so a failure partway can leave the directory
//! inconsistent until the next manual fix. Callers are expected to reload
//! everything from disk after a transfer rather than trust the in-memory
//! lists.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::formats::common::{self, ProvinceId};
use crate::formats::province_block;
use crate::formats::region::StrategicRegion;
use crate::formats::state::StateFile;

/// One region membership change made alongside a state transfer.
#[derive(Debug, Clone, Serialize)]
pub struct RegionMove {
    /// The province that changed region.
    pub province: ProvinceId,
    /// Region the province left.
    pub from_region: u32,
    /// Region the province joined.
    pub to_region: u32,
}

/// What a transfer did, for rendering and for tests.
#[derive(Debug, Serialize)]
pub struct TransferOutcome {
    /// Source state id.
    pub source: u32,
    /// Target state id.
    pub target: u32,
    /// Provinces moved, deduplicated, in numeric order.
    pub moved: Vec<ProvinceId>,
    /// Region membership changes that followed the transfer.
    pub region_moves: Vec<RegionMove>,
    /// Files whose province block was rewritten.
    pub files_written: Vec<PathBuf>,
    /// Files that failed to persist, with the failure message. Writes are
    /// not rolled back, so anything in here means the directory needs
    /// attention.
    pub failed_writes: Vec<(PathBuf, String)>,
}

/// Move `selection` from state `source_id` to state `target_id`.
///
/// Preconditions (each rejected with its own error before anything is
/// touched): the selection is non-empty, every selected id is a member of
/// the source state, and the target resolves to a different existing
/// state.
///
/// With `dry_run` the in-memory lists are updated and the outcome reports
/// what would be written, but no file is touched.
pub fn transfer_provinces(
    states: &mut [StateFile],
    regions: &mut [StrategicRegion],
    source_id: u32,
    target_id: u32,
    selection: &[ProvinceId],
    dry_run: bool,
) -> Result<TransferOutcome> {
    if selection.is_empty() {
        return Err(Error::EmptyTransferSelection);
    }
    let source_index = position_of(states, source_id)?;
    let target_index = position_of(states, target_id)?;
    if source_index == target_index {
        return Err(Error::TransferToSelf { id: source_id });
    }
    for id in selection {
        if !states[source_index].contains_province(id) {
            return Err(Error::ProvinceNotInState {
                province: id.as_str().to_string(),
                state: source_id,
            });
        }
    }

    let mut moved: Vec<ProvinceId> = selection.to_vec();
    common::sort_dedup(&mut moved);

    // The region the transferred provinces should end up in is the one
    // holding the target's first province as it stood before the move.
    let target_region_index = states[target_index]
        .provinces
        .first()
        .and_then(|first| regions.iter().position(|r| r.contains_province(first)));

    states[source_index]
        .provinces
        .retain(|p| !moved.contains(p));
    states[target_index].provinces.extend(moved.iter().cloned());
    common::sort_dedup(&mut states[target_index].provinces);

    let mut region_moves = Vec::new();
    let mut touched_regions = Vec::new();
    for id in &moved {
        let Some(current) = regions.iter().position(|r| r.contains_province(id)) else {
            continue;
        };
        let Some(target_region) = target_region_index else {
            continue;
        };
        if current == target_region {
            continue;
        }

        regions[current].provinces.retain(|p| p != id);
        regions[target_region].provinces.push(id.clone());
        common::sort_dedup(&mut regions[target_region].provinces);
        region_moves.push(RegionMove {
            province: id.clone(),
            from_region: regions[current].id,
            to_region: regions[target_region].id,
        });
        for index in [current, target_region] {
            if !touched_regions.contains(&index) {
                touched_regions.push(index);
            }
        }
    }

    let mut outcome = TransferOutcome {
        source: source_id,
        target: target_id,
        moved,
        region_moves,
        files_written: Vec::new(),
        failed_writes: Vec::new(),
    };

    if dry_run {
        return Ok(outcome);
    }

    let mut writes: Vec<(PathBuf, &[ProvinceId])> = vec![
        (
            states[source_index].path.clone(),
            &states[source_index].provinces,
        ),
        (
            states[target_index].path.clone(),
            &states[target_index].provinces,
        ),
    ];
    for index in touched_regions {
        writes.push((regions[index].path.clone(), &regions[index].provinces));
    }

    for (path, provinces) in writes {
        match province_block::save_provinces(&path, provinces) {
            Ok(()) => outcome.files_written.push(path),
            Err(e) => {
                tracing::warn!("failed to rewrite {}: {e}", path.display());
                outcome.failed_writes.push((path, e.to_string()));
            }
        }
    }

    Ok(outcome)
}

fn position_of(states: &[StateFile], id: u32) -> Result<usize> {
    states
        .iter()
        .position(|s| s.id == id)
        .ok_or(Error::StateNotFound { id })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::formats::region::parse_region_content;
    use crate::formats::state::parse_state_content;

    fn state(id: u32, provinces: &[&str]) -> StateFile {
        let block = provinces.join(" ");
        parse_state_content(
            Path::new(&format!("{id}-state_{id}.txt")),
            &format!("provinces = {{ {block} }}\n"),
        )
        .unwrap()
    }

    fn region(id: u32, provinces: &[&str]) -> StrategicRegion {
        let block = provinces.join(" ");
        parse_region_content(
            Path::new(&format!("region_{id}.txt")),
            &format!("id = {id}\nprovinces = {{ {block} }}\n"),
        )
        .unwrap()
    }

    fn ids(values: &[&str]) -> Vec<ProvinceId> {
        values.iter().map(|v| ProvinceId::new(*v).unwrap()).collect()
    }

    fn province_strings(provinces: &[ProvinceId]) -> Vec<&str> {
        provinces.iter().map(ProvinceId::as_str).collect()
    }

    #[test]
    fn moves_selection_between_states() {
        let mut states = vec![state(322, &["100", "101", "102"]), state(400, &["205"])];
        let mut regions = Vec::new();

        let outcome =
            transfer_provinces(&mut states, &mut regions, 322, 400, &ids(&["101"]), true)
                .unwrap();

        assert_eq!(province_strings(&states[0].provinces), vec!["100", "102"]);
        assert_eq!(province_strings(&states[1].provinces), vec!["101", "205"]);
        assert_eq!(province_strings(&outcome.moved), vec!["101"]);
    }

    #[test]
    fn target_list_is_deduplicated() {
        // 101 is already present in the target; the count must grow by
        // |selection| minus the overlap.
        let mut states = vec![
            state(1, &["100", "101", "102"]),
            state(2, &["101", "300"]),
        ];
        let before = states[1].provinces.len();
        let selection = ids(&["101", "102"]);

        transfer_provinces(&mut states, &mut Vec::new(), 1, 2, &selection, true).unwrap();

        assert_eq!(states[1].provinces.len(), before + 2 - 1);
        assert_eq!(
            province_strings(&states[1].provinces),
            vec!["101", "102", "300"]
        );
        for id in &selection {
            assert!(!states[0].contains_province(id));
            assert!(states[1].contains_province(id));
        }
    }

    #[test]
    fn regions_follow_the_transfer() {
        let mut states = vec![state(1, &["100", "101"]), state(2, &["200"])];
        let mut regions = vec![region(10, &["100", "101"]), region(20, &["200", "201"])];

        let outcome =
            transfer_provinces(&mut states, &mut regions, 1, 2, &ids(&["101"]), true)
                .unwrap();

        assert_eq!(province_strings(&regions[0].provinces), vec!["100"]);
        assert_eq!(
            province_strings(&regions[1].provinces),
            vec!["101", "200", "201"]
        );
        assert_eq!(outcome.region_moves.len(), 1);
        assert_eq!(outcome.region_moves[0].from_region, 10);
        assert_eq!(outcome.region_moves[0].to_region, 20);
    }

    #[test]
    fn same_region_transfer_leaves_regions_alone() {
        let mut states = vec![state(1, &["100", "101"]), state(2, &["200"])];
        let mut regions = vec![region(10, &["100", "101", "200"])];

        let outcome =
            transfer_provinces(&mut states, &mut regions, 1, 2, &ids(&["101"]), true)
                .unwrap();

        assert_eq!(
            province_strings(&regions[0].provinces),
            vec!["100", "101", "200"]
        );
        assert!(outcome.region_moves.is_empty());
    }

    #[test]
    fn target_without_provinces_skips_region_update() {
        let mut states = vec![state(1, &["100"]), state(2, &[])];
        let mut regions = vec![region(10, &["100"])];

        let outcome =
            transfer_provinces(&mut states, &mut regions, 1, 2, &ids(&["100"]), true)
                .unwrap();

        assert!(outcome.region_moves.is_empty());
        assert!(regions[0].contains_province(&ProvinceId::new("100").unwrap()));
    }

    #[test]
    fn preconditions_are_checked_before_mutation() {
        let mut states = vec![state(1, &["100"]), state(2, &["200"])];

        let empty = transfer_provinces(&mut states, &mut Vec::new(), 1, 2, &[], true);
        assert!(matches!(empty, Err(Error::EmptyTransferSelection)));

        let missing_state =
            transfer_provinces(&mut states, &mut Vec::new(), 1, 99, &ids(&["100"]), true);
        assert!(matches!(missing_state, Err(Error::StateNotFound { id: 99 })));

        let to_self =
            transfer_provinces(&mut states, &mut Vec::new(), 1, 1, &ids(&["100"]), true);
        assert!(matches!(to_self, Err(Error::TransferToSelf { .. })));

        let not_member =
            transfer_provinces(&mut states, &mut Vec::new(), 1, 2, &ids(&["555"]), true);
        assert!(matches!(not_member, Err(Error::ProvinceNotInState { .. })));

        // Nothing was mutated by the failed attempts.
        assert_eq!(province_strings(&states[0].provinces), vec!["100"]);
        assert_eq!(province_strings(&states[1].provinces), vec!["200"]);
    }
}

//! Reading and rewriting `provinces = { ... }` blocks
//!
//! Both state files and strategic region files carry their province
//! membership in the same two spellings: a run of `add_province = N`
//! statements, or (far more commonly) a single brace-delimited block of
//! whitespace-separated ids. Rewriting touches nothing but that block.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{self, ProvinceId};
use crate::error::Result;

lazy_static! {
    static ref ADD_PROVINCE_RE: Regex =
        Regex::new(r"add_province\s*=\s*(\d+)").expect("valid regex");
    static ref BLOCK_RE: Regex =
        Regex::new(r"(?s)provinces\s*=\s*\{(.*?)\}").expect("valid regex");
    static ref BLOCK_OPEN_RE: Regex =
        Regex::new(r"^(\s*)provinces\s*=\s*\{").expect("valid regex");
}

/// Extract the province ids of a state or strategic region file.
///
/// `add_province = N` statements win if any are present; otherwise the
/// first `provinces = { ... }` block is split on whitespace. A file with
/// neither simply has no provinces. Any token that is not a decimal
/// number fails the whole file ([`crate::Error::InvalidProvinceId`]).
pub fn extract_province_ids(content: &str) -> Result<Vec<ProvinceId>> {
    let mut ids = Vec::new();

    for capture in ADD_PROVINCE_RE.captures_iter(content) {
        ids.push(ProvinceId::new(&capture[1])?);
    }
    if !ids.is_empty() {
        return Ok(ids);
    }

    if let Some(capture) = BLOCK_RE.captures(content) {
        for token in capture[1].split_whitespace() {
            ids.push(ProvinceId::new(token)?);
        }
    }
    Ok(ids)
}

/// Rewrite the province block of a file, preserving everything else.
///
/// Lines pass through unchanged until one opens a `provinces = {` block;
/// the original block body is replaced by one id per line (one tab deeper
/// than the opening line), sorted ascending and deduplicated, and the
/// closing-brace line is kept. A single-line block is expanded to the
/// multi-line form. A file without a block gets one appended at the end
/// when the province set is non-empty.
pub fn rewrite_province_block(content: &str, provinces: &[ProvinceId]) -> String {
    let mut sorted: Vec<ProvinceId> = provinces.to_vec();
    common::sort_dedup(&mut sorted);

    let mut out = String::new();
    let mut in_block = false;
    let mut rewritten = false;

    for line in content.lines() {
        if in_block {
            if line.contains('}') {
                // Original closing-brace line ends the block.
                out.push_str(line);
                out.push('\n');
                in_block = false;
            }
            continue;
        }

        if !rewritten
            && let Some(capture) = BLOCK_OPEN_RE.captures(line)
        {
            let indent = &capture[1];
            let brace = line.find('{').expect("matched opening brace");
            out.push_str(&line[..=brace]);
            out.push('\n');
            for id in &sorted {
                out.push_str(indent);
                out.push('\t');
                out.push_str(id.as_str());
                out.push('\n');
            }
            rewritten = true;
            if line[brace + 1..].contains('}') {
                // Single-line block: synthesize the closing line.
                out.push_str(indent);
                out.push_str("}\n");
            } else {
                in_block = true;
            }
            continue;
        }

        out.push_str(line);
        out.push('\n');
    }

    if !rewritten && !sorted.is_empty() {
        out.push_str("provinces = {\n");
        for id in &sorted {
            out.push('\t');
            out.push_str(id.as_str());
            out.push('\n');
        }
        out.push_str("}\n");
    }

    out
}

/// Rewrite the province block of a file on disk.
///
/// One open-rewrite-close cycle; no handle outlives the call.
pub fn save_provinces(path: &Path, provinces: &[ProvinceId]) -> Result<()> {
    let content = fs::read_to_string(path)?;
    fs::write(path, rewrite_province_block(&content, provinces))?;
    Ok(())
}

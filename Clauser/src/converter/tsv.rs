//! Minimal TSV table reader
//!
//! The converters consume spreadsheet exports: a header row naming the
//! columns, tab-separated cells, no quoting or escaping (tabs cannot
//! appear inside cells in the exports this handles).

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A TSV file held in memory, with access to columns by header name.
#[derive(Debug, Clone)]
pub struct TsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TsvTable {
    /// Read and parse a TSV file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            Error::EmptyTsvTable { .. } => Error::EmptyTsvTable {
                path: path.to_path_buf(),
            },
            other => other,
        })
    }

    /// Parse TSV content; the first line is the header row.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content.lines();
        let header_line = lines.next().filter(|l| !l.trim().is_empty()).ok_or(
            Error::EmptyTsvTable {
                path: Path::new("<memory>").to_path_buf(),
            },
        )?;

        let headers: Vec<String> = header_line
            .split('\t')
            .map(|h| h.trim().to_string())
            .collect();
        let rows = lines
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.split('\t').map(|c| c.trim().to_string()).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    /// Index of a named column.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::TsvColumnNotFound {
                name: name.to_string(),
            })
    }

    /// All data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell at `column` of `row`, treating an empty cell as absent - the
    /// converters skip rows with blanks rather than emitting half entries.
    pub fn cell<'a>(&self, row: &'a [String], column: usize) -> Option<&'a str> {
        row.get(column)
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }
}

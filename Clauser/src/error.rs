//! Error types for `clauser`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `clauser` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== State File Errors ====================
    /// The filename does not follow the `<id>-<name>.txt` convention.
    #[error("not a state filename (expected <id>-<name>.txt): {}", .path.display())]
    InvalidStateFileName {
        /// The offending path.
        path: PathBuf,
    },

    /// The numeric prefix of a state filename is out of range.
    #[error("state id out of range in filename: {}", .path.display())]
    StateIdOutOfRange {
        /// The offending path.
        path: PathBuf,
    },

    // ==================== Strategic Region Errors ====================
    /// A strategic region file has no `id = N` field.
    #[error("strategic region has no id field: {}", .path.display())]
    MissingRegionId {
        /// The offending path.
        path: PathBuf,
    },

    // ==================== Province Errors ====================
    /// A province id token is not a decimal number.
    #[error("invalid province id: {value:?}")]
    InvalidProvinceId {
        /// The rejected token.
        value: String,
    },

    /// A row of the province definition table could not be parsed.
    #[error("malformed definition row {line}: {message}")]
    MalformedDefinitionRow {
        /// 1-based line number within the table.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    // ==================== Transfer Errors ====================
    /// A transfer was requested with no province ids.
    #[error("no provinces selected for transfer")]
    EmptyTransferSelection,

    /// The source or target state id does not resolve to a loaded state.
    #[error("state {id} not found")]
    StateNotFound {
        /// The unresolved state id.
        id: u32,
    },

    /// Source and target of a transfer are the same state.
    #[error("source and target are both state {id}")]
    TransferToSelf {
        /// The state id used on both sides.
        id: u32,
    },

    /// A selected province is not a member of the source state.
    #[error("province {province} is not part of state {state}")]
    ProvinceNotInState {
        /// The selected province id.
        province: String,
        /// The source state id.
        state: u32,
    },

    // ==================== Converter Errors ====================
    /// A TSV table was empty or missing its header row.
    #[error("TSV table has no header row: {}", .path.display())]
    EmptyTsvTable {
        /// The table file path.
        path: PathBuf,
    },

    /// A required TSV column was not found in the header row.
    #[error("TSV column {name:?} not found")]
    TsvColumnNotFound {
        /// The requested column name.
        name: String,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `clauser` operations.
pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("format error: {0}")]
    Clauser(#[from] clauser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("state {0} not found in catalog")]
    StateNotFound(u32),
}

pub type Result<T> = std::result::Result<T, Error>;

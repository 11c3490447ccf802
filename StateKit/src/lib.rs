//! StateKit - state browser and province transfer toolkit for Hearts of
//! Iron IV mods
//!
//! Sits on top of [`clauser`] and adds what a mod author actually works
//! with day to day: a catalog of every state and strategic region in the
//! checkout, sortable and searchable by column; province transfers that
//! keep state and region files consistent; and the TSV converters for
//! localisation upkeep. The `statekit` binary is a thin CLI over these
//! modules.

// Re-export clauser
pub use clauser;

pub mod catalog;
pub mod config;
pub mod error;
pub mod operations;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

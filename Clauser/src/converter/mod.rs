//! Stand-alone converters
//!
//! One-shot generators that sit next to the state tooling in a mod
//! author's workflow: spreadsheet (TSV) exports into localisation files
//! and game-script snippets, and a template rewrite over country history
//! files.

pub mod cosmetic;
pub mod country_template;
pub mod tsv;

pub use cosmetic::{write_localization_file, write_startup_script};
pub use country_template::apply_country_template;
pub use tsv::TsvTable;

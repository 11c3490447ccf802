//! # Clauser
//!
//! A pure-Rust library for the Clausewitz-style plain-text files of a
//! Hearts of Iron IV mod tree.
//!
//! ## Supported Formats
//!
//! - **State files** - `history/states/<id>-<name>.txt` ownership,
//!   manpower and province membership
//! - **Strategic regions** - `map/strategicregions/<name>.txt` province
//!   groupings
//! - **Province definitions** - the semicolon-delimited map table
//! - **Localisation** - `l_<language>:` keyed `.yml` files
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use clauser::formats::state;
//!
//! // Load every state in a mod's history directory
//! let states = state::load_directory(Path::new("history/states"))?;
//! println!("loaded {} states", states.len());
//! # Ok::<(), clauser::Error>(())
//! ```
//!
//! ### Transferring provinces
//!
//! ```no_run
//! use std::path::Path;
//! use clauser::formats::{ProvinceId, region, state};
//! use clauser::transfer::transfer_provinces;
//!
//! let mut states = state::load_directory(Path::new("history/states"))?;
//! let mut regions = region::load_directory(Path::new("map/strategicregions"))?;
//! let moved = vec![ProvinceId::new("101")?];
//! let outcome = transfer_provinces(&mut states, &mut regions, 322, 400, &moved, false)?;
//! println!("rewrote {} files", outcome.files_written.len());
//! # Ok::<(), clauser::Error>(())
//! ```
//!
//! File writes rewrite only the `provinces = { ... }` block of a file;
//! everything else is preserved byte-for-byte.

pub mod converter;
pub mod error;
pub mod formats;
pub mod transfer;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::ProvinceId;
    pub use crate::formats::localization::{LocalizationTable, read_localization};
    pub use crate::formats::province_block::{
        extract_province_ids, rewrite_province_block, save_provinces,
    };
    pub use crate::formats::provinces::{ProvinceDefinition, read_definitions};
    pub use crate::formats::region::StrategicRegion;
    pub use crate::formats::state::StateFile;
    pub use crate::transfer::{TransferOutcome, transfer_provinces};

    pub use crate::converter::{
        apply_country_template, write_localization_file, write_startup_script,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! High-level operations over the catalog
//!
//! The only mutation path in the crate: callers hand in the catalog and a
//! request, the operation delegates to the format-level engine, and the
//! catalog is reloaded from disk afterwards so the in-memory view always
//! matches what was actually written.

mod transfer;

pub use transfer::{TransferRequest, transfer_provinces};

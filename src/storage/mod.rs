//! Storage layer for tpkit - whole-file JSON persistence.
//!
//! Each collection lives in one JSON array file that is rewritten in full on
//! every save. There is no locking: concurrent writers race and the last
//! write wins.

mod json_file;
mod traits;

#[cfg(test)]
pub(crate) mod memory;

pub use json_file::JsonFileStore;
pub use traits::{HasId, RecordStore, max_id};

//! tpkit - small file-backed command-line tools
//!
//! Two tools share this library: a task manager and a calculator with a
//! persisted history. Both follow the same layering: records in `domain`,
//! whole-file JSON persistence in `storage`, business logic in `service`,
//! and command-line surfaces in `cli`.

pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod service;
pub mod storage;

pub use error::{Result, TpkitError};

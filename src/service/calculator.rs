//! Calculator service
//!
//! Performs arithmetic and keeps an append-only history of every successful
//! calculation, persisted after each one.

use std::path::Path;

use log::{debug, info};

use crate::config::Config;
use crate::domain::{CalculationEntry, Operation};
use crate::error::{Result, TpkitError};
use crate::storage::{JsonFileStore, RecordStore};

/// Arithmetic with persisted history
#[derive(Debug)]
pub struct CalculatorService<S: RecordStore<CalculationEntry> = JsonFileStore<CalculationEntry>> {
    store: S,
    history: Vec<CalculationEntry>,
}

impl CalculatorService<JsonFileStore<CalculationEntry>> {
    /// Open the history file named by the configuration
    pub fn open(config: &Config) -> Result<Self> {
        Self::with_store(JsonFileStore::new(&config.storage.history_file))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl<S: RecordStore<CalculationEntry>> CalculatorService<S> {
    /// Wrap a store and load its current history
    pub fn with_store(store: S) -> Result<Self> {
        let history = store.load()?;
        debug!("Calculator opened with {} history entries", history.len());
        Ok(Self { store, history })
    }

    /// Compute `a op b`, record it, and return the result
    ///
    /// Failed calculations are neither recorded nor persisted. Operands and
    /// results must be finite, since JSON has no encoding for NaN or infinity.
    pub fn perform(&mut self, operation: Operation, a: f64, b: f64) -> Result<f64> {
        for operand in [a, b] {
            if !operand.is_finite() {
                return Err(TpkitError::InvalidNumber(operand.to_string()));
            }
        }
        let result = operation.apply(a, b)?;
        if !result.is_finite() {
            return Err(TpkitError::NonFiniteResult(result));
        }

        let mut updated = self.history.clone();
        updated.push(CalculationEntry::new(operation, a, b, result));
        self.store.save(&updated)?;
        self.history = updated;

        info!("Performed {} {} {} = {}", operation, a, b, result);
        Ok(result)
    }

    /// Every recorded calculation, re-read from the store first
    pub fn history(&mut self) -> Result<&[CalculationEntry]> {
        self.history = self.store.load()?;
        Ok(&self.history)
    }

    /// In-memory history without touching the store
    pub fn entries(&self) -> &[CalculationEntry] {
        &self.history
    }

    /// Write the in-memory history to the store
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.history)?;
        info!("Saved {} history entries", self.history.len());
        Ok(())
    }
}

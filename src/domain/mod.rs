//! Domain types for tpkit
//!
//! This module contains the persisted records:
//! - Task: a to-do item with an integer id and a completion flag
//! - CalculationEntry: one performed calculation in the calculator history
//! - Operation: the closed set of arithmetic operations

pub mod calculation;
pub mod task;

pub use calculation::{CalculationEntry, Operation};
pub use task::Task;

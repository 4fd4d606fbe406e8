//! Calculation history entries and the arithmetic they record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clock;
use crate::error::{Result, TpkitError};

/// The four supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        }
    }

    /// Apply the operation to two operands
    pub fn apply(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Sub => Ok(sub(a, b)),
            Operation::Mul => Ok(mul(a, b)),
            Operation::Div => div(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = TpkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "sub" => Ok(Operation::Sub),
            "mul" => Ok(Operation::Mul),
            "div" => Ok(Operation::Div),
            _ => Err(TpkitError::UnknownOperation(s.to_string())),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`; an exactly-zero divisor (either sign) is rejected
pub fn div(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(TpkitError::DivisionByZero);
    }
    Ok(a / b)
}

/// One performed calculation, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationEntry {
    #[serde(rename = "op")]
    pub operation: Operation,

    #[serde(rename = "a")]
    pub operand_a: f64,

    #[serde(rename = "b")]
    pub operand_b: f64,

    pub result: f64,

    /// Creation instant, stored as an RFC 3339 string
    #[serde(rename = "when")]
    pub timestamp: DateTime<Utc>,
}

impl CalculationEntry {
    /// Record a calculation stamped with the current time
    pub fn new(operation: Operation, operand_a: f64, operand_b: f64, result: f64) -> Self {
        Self {
            operation,
            operand_a,
            operand_b,
            result,
            timestamp: clock::now(),
        }
    }

    /// Render as `op a b = result @ when`
    pub fn describe(&self, date_format: &str) -> String {
        format!(
            "{} {} {} = {} @ {}",
            self.operation,
            self.operand_a,
            self.operand_b,
            self.result,
            clock::format_timestamp(&self.timestamp, date_format)
        )
    }
}

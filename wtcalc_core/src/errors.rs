//! # Error Types
//!
//! Structured error types for wtcalc_core. Calculators only ever fail with
//! [`CalcError::MissingRequiredInput`]; the remaining variants belong to the
//! definitions and preferences layers that touch the filesystem.
//!
//! Numeric singularities (a zero denominator, zero raised to a negative
//! power) are not errors. They come back as infinite or NaN values.
//!
//! ## Example
//!
//! ```rust
//! use wtcalc_core::calculations::{Brzycki, Calculator};
//! use wtcalc_core::errors::{CalcError, Step};
//! use wtcalc_core::options::LiftOptions;
//!
//! let calc = Brzycki::new(LiftOptions::new().lifted_weight(100.0));
//! match calc.compute() {
//!     Err(CalcError::MissingRequiredInput { step, .. }) => assert_eq!(step, Step::Multiplier),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::Input;

/// Result type alias for wtcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// The calculation step that detected a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// `compute_multiplier()`
    Multiplier,
    /// `compute()`
    Main,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Multiplier => write!(f, "multiplier"),
            Step::Main => write!(f, "main"),
        }
    }
}

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A calculation step was invoked without all of its required inputs
    #[error("{calculator} calculation does not have required options ({step} step): missing {}", join_inputs(.missing))]
    MissingRequiredInput {
        calculator: String,
        step: Step,
        missing: Vec<Input>,
    },

    /// Calculator name not recognised
    #[error("Unknown calculator: '{name}'")]
    UnknownCalculator { name: String },

    /// A coefficient definition is malformed
    #[error("Invalid definition for '{entry}': {reason}")]
    InvalidDefinition { entry: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

fn join_inputs(inputs: &[Input]) -> String {
    inputs
        .iter()
        .map(|i| i.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl CalcError {
    /// Create a MissingRequiredInput error
    pub fn missing_required_input(calculator: impl Into<String>, step: Step, missing: Vec<Input>) -> Self {
        CalcError::MissingRequiredInput {
            calculator: calculator.into(),
            step,
            missing,
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { name: name.into() }
    }

    /// Create an InvalidDefinition error
    pub fn invalid_definition(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDefinition {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// The step that failed, for missing-input errors
    pub fn step(&self) -> Option<Step> {
        match self {
            CalcError::MissingRequiredInput { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingRequiredInput { .. } => "MISSING_REQUIRED_INPUT",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::InvalidDefinition { .. } => "INVALID_DEFINITION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::missing_required_input("Brzycki", Step::Multiplier, vec![Input::Reps]);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_missing_input_message() {
        let error = CalcError::missing_required_input(
            "Siff (squat)",
            Step::Main,
            vec![Input::SquatWeight],
        );
        assert_eq!(
            error.to_string(),
            "Siff (squat) calculation does not have required options (main step): missing squatWeight"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::missing_required_input("Wathan", Step::Main, vec![]).error_code(),
            "MISSING_REQUIRED_INPUT"
        );
        assert_eq!(CalcError::unknown_calculator("epley").error_code(), "UNKNOWN_CALCULATOR");
        assert_eq!(CalcError::serialization("bad").step(), None);
    }
}

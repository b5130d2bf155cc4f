//! # Calculator Options
//!
//! The typed options bag handed to every calculator at construction.
//! Each named input is optional; calculators decide which ones they need
//! and check for them before doing any arithmetic.
//!
//! ## JSON Example
//!
//! ```json
//! { "reps": 5, "liftedWeight": 100.0, "bodyWeight": 82.5, "sex": "male" }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wtcalc_core::options::{Input, LiftOptions};
//!
//! let opts = LiftOptions::new().reps(5.0).lifted_weight(100.0);
//! assert!(opts.check(&[Input::Reps, Input::LiftedWeight]));
//! assert!(!opts.check(&[Input::BodyWeight]));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Sex of the lifter, used to pick Wilks coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            _ => Err(CalcError::serialization(format!("unknown sex '{}'", s))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Names of the inputs a calculator may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Input {
    Reps,
    LiftedWeight,
    BodyWeight,
    SquatWeight,
    BenchWeight,
    DeadWeight,
    Age,
    Sex,
}

impl Input {
    /// The input's name as it appears in the serialized options mapping
    pub fn name(&self) -> &'static str {
        match self {
            Input::Reps => "reps",
            Input::LiftedWeight => "liftedWeight",
            Input::BodyWeight => "bodyWeight",
            Input::SquatWeight => "squatWeight",
            Input::BenchWeight => "benchWeight",
            Input::DeadWeight => "deadWeight",
            Input::Age => "age",
            Input::Sex => "sex",
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw training inputs for a calculation.
///
/// Builder methods consume the value and return an updated copy, so an
/// options value is never mutated once a calculator holds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftOptions {
    /// Repetitions performed with `lifted_weight`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<f64>,
    /// Weight lifted (single lift, or the total for Siff/Wilks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifted_weight: Option<f64>,
    /// Lifter's body weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squat_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_weight: Option<f64>,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
}

impl LiftOptions {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repetitions performed.
    pub fn reps(mut self, reps: f64) -> Self {
        self.reps = Some(reps);
        self
    }

    /// Set the weight lifted, or the total for Wilks and Siff total.
    pub fn lifted_weight(mut self, weight: f64) -> Self {
        self.lifted_weight = Some(weight);
        self
    }

    /// Set the lifter's body weight.
    pub fn body_weight(mut self, weight: f64) -> Self {
        self.body_weight = Some(weight);
        self
    }

    /// Set the squat for Siff squat.
    pub fn squat_weight(mut self, weight: f64) -> Self {
        self.squat_weight = Some(weight);
        self
    }

    /// Set the bench press for Siff bench.
    pub fn bench_weight(mut self, weight: f64) -> Self {
        self.bench_weight = Some(weight);
        self
    }

    /// Set the deadlift for Siff dead.
    pub fn dead_weight(mut self, weight: f64) -> Self {
        self.dead_weight = Some(weight);
        self
    }

    /// Set the age in years, enabling age correction where configured.
    pub fn age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the sex that selects the Wilks coefficients.
    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Look up a numeric input. `Sex` is not numeric and always yields `None`;
    /// use the `sex` field directly.
    pub fn value(&self, input: Input) -> Option<f64> {
        match input {
            Input::Reps => self.reps,
            Input::LiftedWeight => self.lifted_weight,
            Input::BodyWeight => self.body_weight,
            Input::SquatWeight => self.squat_weight,
            Input::BenchWeight => self.bench_weight,
            Input::DeadWeight => self.dead_weight,
            Input::Age => self.age,
            Input::Sex => None,
        }
    }

    /// Whether an input is present.
    pub fn has(&self, input: Input) -> bool {
        match input {
            Input::Sex => self.sex.is_some(),
            other => self.value(other).is_some(),
        }
    }

    /// True iff every named input is present. Pure predicate.
    pub fn check(&self, names: &[Input]) -> bool {
        names.iter().all(|&name| self.has(name))
    }

    /// The subset of `names` that is absent, in order.
    pub fn missing(&self, names: &[Input]) -> Vec<Input> {
        names.iter().copied().filter(|&name| !self.has(name)).collect()
    }
}

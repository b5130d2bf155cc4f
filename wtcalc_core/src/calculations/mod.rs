//! # Strength Calculators
//!
//! Every calculator implements the [`Calculator`] contract:
//!
//! - `required_inputs(step)` - fixed input set for the multiplier and main steps
//! - `compute_multiplier()` - checks its inputs, then evaluates the formula's factor
//! - `compute()` - checks its inputs, calls `compute_multiplier()`, builds a [`CalcOutput`]
//!
//! Each step checks its own inputs before any arithmetic, so a missing input
//! is reported by whichever step runs into it first.
//!
//! ## Available Calculators
//!
//! - [`brzycki`] - 1RM, `36 / (37 - reps)`
//! - [`mcglothin`] - 1RM, `101.3 - 2.67123 * reps`
//! - [`wathan`] - 1RM, `48.8 + 53.8 * e^(-0.075 * reps)`
//! - [`siff`] - Siff score for the total or a single lift
//! - [`wilks`] - Wilks score for a total
//! - [`age`] - age-correction decorator usable with any calculator
//!
//! ## Example
//!
//! ```rust
//! use wtcalc_core::calculations::{Brzycki, Calculator};
//! use wtcalc_core::options::LiftOptions;
//!
//! let calc = Brzycki::new(LiftOptions::new().reps(10.0).lifted_weight(100.0));
//! let result = calc.compute().unwrap();
//! assert!((result.val - 400.0 / 3.0).abs() < 1e-9);
//! ```

pub mod age;
pub mod brzycki;
pub mod mcglothin;
pub mod registry;
pub mod siff;
pub mod wathan;
pub mod wilks;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, Step};
use crate::options::{Input, LiftOptions};

// Re-export commonly used types
pub use age::{AgeAdjustable, AgeAdjusted, AgeCurve, AgeFactorTable, NoAgeCorrection};
pub use brzycki::Brzycki;
pub use mcglothin::McGlothin;
pub use registry::CalculatorKind;
pub use siff::Siff;
pub use wathan::Wathan;
pub use wilks::Wilks;

/// Result of a single `compute()` call.
///
/// `val` is the primary value. Auxiliary fields depend on the formula and
/// are omitted from JSON when not set.
///
/// ## JSON Example
///
/// ```json
/// { "val": 133.33, "mult": 1.3333 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcOutput {
    /// Estimated 1RM or normalized score
    pub val: f64,

    /// Multiplier, raw (Brzycki, Wilks) or `liftedWeight / multiplier`
    /// (McGlothin, Wathan)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mult: Option<f64>,

    /// Lifted weight as a percentage of body weight equivalent (Siff)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodyweight_equivalent_pct: Option<f64>,

    /// Age correction applied to `val`, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_factor: Option<f64>,
}

impl CalcOutput {
    /// An output carrying only `val`.
    pub fn new(val: f64) -> Self {
        CalcOutput {
            val,
            mult: None,
            bodyweight_equivalent_pct: None,
            age_factor: None,
        }
    }

    /// Attach the multiplier.
    pub fn with_mult(mut self, mult: f64) -> Self {
        self.mult = Some(mult);
        self
    }

    /// Attach the body weight equivalent percentage.
    pub fn with_bodyweight_equivalent_pct(mut self, pct: f64) -> Self {
        self.bodyweight_equivalent_pct = Some(pct);
        self
    }

    /// Record the age factor that was applied to `val`.
    pub fn with_age_factor(mut self, factor: f64) -> Self {
        self.age_factor = Some(factor);
        self
    }
}

/// The shared calculator contract.
pub trait Calculator {
    /// Human-readable name used in error messages
    fn display_name(&self) -> String;

    /// The options this calculator was built with
    fn options(&self) -> &LiftOptions;

    /// Inputs that must be present before `step` does any arithmetic
    fn required_inputs(&self, step: Step) -> Vec<Input>;

    /// Evaluate the formula's multiplier.
    fn compute_multiplier(&self) -> CalcResult<f64>;

    /// Evaluate the formula.
    fn compute(&self) -> CalcResult<CalcOutput>;

    /// True iff every named input is present
    fn check_options(&self, names: &[Input]) -> bool {
        self.options().check(names)
    }

    /// Fail with `MissingRequiredInput` unless `step`'s inputs are present.
    fn require(&self, step: Step) -> CalcResult<()> {
        let required = self.required_inputs(step);
        if self.check_options(&required) {
            return Ok(());
        }
        Err(CalcError::missing_required_input(
            self.display_name(),
            step,
            self.options().missing(&required),
        ))
    }

    /// Read one numeric input on behalf of `step`.
    fn input(&self, step: Step, input: Input) -> CalcResult<f64> {
        self.options()
            .value(input)
            .ok_or_else(|| CalcError::missing_required_input(self.display_name(), step, vec![input]))
    }

    /// Check both steps up front, in the order `compute()` runs them.
    fn validate(&self) -> CalcResult<()> {
        self.require(Step::Main)?;
        self.require(Step::Multiplier)
    }
}

/// A single repetition is already a 1RM.
pub(crate) fn is_single_rep(reps: f64) -> bool {
    reps == 1.0
}

/// Output convention shared by McGlothin and Wathan, where the multiplier
/// is a percentage of the 1RM.
pub(crate) fn percentage_output(lifted_weight: f64, mult: f64) -> CalcOutput {
    CalcOutput::new((lifted_weight * 100.0) / mult).with_mult(lifted_weight / mult)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_serialization_omits_unset_fields() {
        let output = CalcOutput::new(150.0).with_mult(1.5);
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"val":150.0,"mult":1.5}"#);

        let output = CalcOutput::new(90.0).with_bodyweight_equivalent_pct(0.8);
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"val":90.0,"bodyweightEquivalentPct":0.8}"#);
    }

    #[test]
    fn test_validate_reports_main_step_first() {
        let calc = Brzycki::new(LiftOptions::new());
        let err = calc.validate().unwrap_err();
        assert_eq!(err.step(), Some(Step::Main));

        let calc = Brzycki::new(LiftOptions::new().lifted_weight(100.0));
        let err = calc.validate().unwrap_err();
        assert_eq!(err.step(), Some(Step::Multiplier));

        let calc = Brzycki::new(LiftOptions::new().lifted_weight(100.0).reps(3.0));
        assert!(calc.validate().is_ok());
    }

    #[test]
    fn test_validate_matches_compute() {
        let calc = Wathan::new(LiftOptions::new().reps(4.0));
        assert_eq!(calc.validate().unwrap_err(), calc.compute().unwrap_err());
    }

    #[test]
    fn test_single_rep_multiplier_is_exactly_one() {
        let opts = LiftOptions::new().reps(1.0).lifted_weight(140.0);
        let calcs: Vec<Box<dyn Calculator>> = vec![
            Box::new(Brzycki::new(opts)),
            Box::new(McGlothin::new(opts)),
            Box::new(Wathan::new(opts)),
        ];
        for calc in calcs {
            assert_eq!(calc.compute_multiplier().unwrap(), 1.0, "{}", calc.display_name());
        }
    }

    #[test]
    fn test_repeated_compute_is_deterministic() {
        let opts = LiftOptions::new().reps(8.0).lifted_weight(92.5).body_weight(81.0);
        let calcs: Vec<Box<dyn Calculator>> = vec![
            Box::new(Brzycki::new(opts)),
            Box::new(McGlothin::new(opts)),
            Box::new(Wathan::new(opts)),
            Box::new(Siff::standard(opts, Default::default())),
        ];
        for calc in calcs {
            assert_eq!(calc.compute().unwrap(), calc.compute().unwrap());
        }
    }
}

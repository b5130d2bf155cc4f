//! # Brzycki 1RM
//!
//! `1RM = liftedWeight * 36 / (37 - reps)`
//!
//! The multiplier is not guarded at `reps == 37`; the division yields an
//! infinite value, which is returned as-is.

use crate::calculations::{is_single_rep, CalcOutput, Calculator};
use crate::errors::{CalcResult, Step};
use crate::options::{Input, LiftOptions};

/// Brzycki 1RM calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct Brzycki {
    options: LiftOptions,
}

impl Brzycki {
    /// Create a calculator over `options`. Inputs are checked per step
    /// when the formula runs.
    pub fn new(options: LiftOptions) -> Self {
        Brzycki { options }
    }
}

impl Calculator for Brzycki {
    fn display_name(&self) -> String {
        "Brzycki".to_string()
    }

    fn options(&self) -> &LiftOptions {
        &self.options
    }

    fn required_inputs(&self, step: Step) -> Vec<Input> {
        match step {
            Step::Multiplier => vec![Input::Reps],
            Step::Main => vec![Input::LiftedWeight],
        }
    }

    fn compute_multiplier(&self) -> CalcResult<f64> {
        self.require(Step::Multiplier)?;
        let reps = self.input(Step::Multiplier, Input::Reps)?;

        if is_single_rep(reps) {
            return Ok(1.0);
        }

        Ok(36.0 / (37.0 - reps))
    }

    fn compute(&self) -> CalcResult<CalcOutput> {
        self.require(Step::Main)?;
        let lifted_weight = self.input(Step::Main, Input::LiftedWeight)?;

        let mult = self.compute_multiplier()?;
        let output = CalcOutput::new(lifted_weight * mult).with_mult(mult);

        log::debug!("Brzycki: {} x {:?} -> {:.2}", lifted_weight, self.options.reps, output.val);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_ten_reps() {
        let calc = Brzycki::new(LiftOptions::new().reps(10.0));
        assert_eq!(calc.compute_multiplier().unwrap(), 36.0 / 27.0);
    }

    #[test]
    fn test_compute_ten_reps() {
        let calc = Brzycki::new(LiftOptions::new().reps(10.0).lifted_weight(100.0));
        let result = calc.compute().unwrap();
        assert!((result.val - 400.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.mult, Some(36.0 / 27.0));
        assert_eq!(result.bodyweight_equivalent_pct, None);
    }

    #[test]
    fn test_single_rep() {
        let calc = Brzycki::new(LiftOptions::new().reps(1.0).lifted_weight(180.0));
        assert_eq!(calc.compute_multiplier().unwrap(), 1.0);
        assert_eq!(calc.compute().unwrap().val, 180.0);
    }

    #[test]
    fn test_missing_reps_fails_in_multiplier_step() {
        let calc = Brzycki::new(LiftOptions::new().lifted_weight(100.0));
        let err = calc.compute().unwrap_err();
        assert_eq!(err.step(), Some(Step::Multiplier));
        assert!(err.to_string().starts_with("Brzycki calculation"));
        assert!(err.to_string().contains("reps"));
    }

    #[test]
    fn test_missing_weight_fails_in_main_step() {
        let calc = Brzycki::new(LiftOptions::new().reps(5.0));
        assert_eq!(calc.compute().unwrap_err().step(), Some(Step::Main));
        // The multiplier step only needs reps
        assert!(calc.compute_multiplier().is_ok());
    }

    #[test]
    fn test_singularity_at_37_reps() {
        let calc = Brzycki::new(LiftOptions::new().reps(37.0).lifted_weight(50.0));
        assert!(calc.compute_multiplier().unwrap().is_infinite());
        assert!(calc.compute().unwrap().val.is_infinite());
    }
}

//! # Wathan 1RM
//!
//! `multiplier = 48.8 + 53.8 * e^(-0.075 * reps)`, with the same output
//! convention as McGlothin.

use crate::calculations::{is_single_rep, percentage_output, CalcOutput, Calculator};
use crate::errors::{CalcResult, Step};
use crate::options::{Input, LiftOptions};

/// Wathan 1RM calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct Wathan {
    options: LiftOptions,
}

impl Wathan {
    /// Create a calculator over `options`.
    pub fn new(options: LiftOptions) -> Self {
        Wathan { options }
    }
}

impl Calculator for Wathan {
    fn display_name(&self) -> String {
        "Wathan".to_string()
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

        Ok(48.8 + 53.8 * (-0.075 * reps).exp())
    }

    fn compute(&self) -> CalcResult<CalcOutput> {
        self.require(Step::Main)?;
        let lifted_weight = self.input(Step::Main, Input::LiftedWeight)?;

        let mult = self.compute_multiplier()?;
        let output = percentage_output(lifted_weight, mult);

        log::debug!("Wathan: {} x {:?} -> {:.2}", lifted_weight, self.options.reps, output.val);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rep_ignores_exponential() {
        let calc = Wathan::new(LiftOptions::new().reps(1.0));
        assert_eq!(calc.compute_multiplier().unwrap(), 1.0);
    }

    #[test]
    fn test_multiplier_ten_reps() {
        let calc = Wathan::new(LiftOptions::new().reps(10.0));
        let expected = 48.8 + 53.8 * (-0.75_f64).exp();
        assert!((calc.compute_multiplier().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_compute_ten_reps() {
        let calc = Wathan::new(LiftOptions::new().reps(10.0).lifted_weight(100.0));
        let result = calc.compute().unwrap();
        // 100 * 100 / 74.21 ~= 134.75
        assert!((result.val - 134.75).abs() < 0.01);
        let mult = calc.compute_multiplier().unwrap();
        assert_eq!(result.mult, Some(100.0 / mult));
    }

    #[test]
    fn test_missing_reps() {
        let calc = Wathan::new(LiftOptions::new().lifted_weight(60.0));
        let err = calc.compute().unwrap_err();
        assert_eq!(err.step(), Some(Step::Multiplier));
        assert!(err.to_string().starts_with("Wathan"));
    }

    #[test]
    fn test_missing_lifted_weight_fails_main_step() {
        let calc = Wathan::new(LiftOptions::new().reps(8.0));
        assert!(calc.compute_multiplier().is_ok());

        let err = calc.compute().unwrap_err();
        assert_eq!(err.step(), Some(Step::Main));
        assert_eq!(err.error_code(), "MISSING_REQUIRED_INPUT");
        assert!(err.to_string().contains("liftedWeight"));
    }
}

//! # McGlothin 1RM
//!
//! The multiplier is the percentage of 1RM a set of `reps` represents:
//! `101.3 - 2.67123 * reps`. The estimate is `liftedWeight * 100 / multiplier`
//! and the auxiliary `mult` is `liftedWeight / multiplier`.

use crate::calculations::{is_single_rep, percentage_output, CalcOutput, Calculator};
use crate::errors::{CalcResult, Step};
use crate::options::{Input, LiftOptions};

/// McGlothin 1RM calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct McGlothin {
    options: LiftOptions,
}

impl McGlothin {
    /// Create a calculator over `options`; nothing is checked until `compute`.
    pub fn new(options: LiftOptions) -> Self {
        McGlothin { options }
    }
}

impl Calculator for McGlothin {
    fn display_name(&self) -> String {
        "McGlothin".to_string()
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

        Ok(101.3 - 2.67123 * reps)
    }

    fn compute(&self) -> CalcResult<CalcOutput> {
        self.require(Step::Main)?;
        let lifted_weight = self.input(Step::Main, Input::LiftedWeight)?;

        let mult = self.compute_multiplier()?;
        let output = percentage_output(lifted_weight, mult);

        log::debug!("McGlothin: {} x {:?} -> {:.2}", lifted_weight, self.options.reps, output.val);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_multiplier_five_reps() {
        let calc = McGlothin::new(LiftOptions::new().reps(5.0));
        assert_eq!(calc.compute_multiplier().unwrap(), 101.3 - 2.67123 * 5.0);
    }

    #[test]
    fn test_compute_five_reps() {
        let calc = McGlothin::new(LiftOptions::new().reps(5.0).lifted_weight(100.0));
        let result = calc.compute().unwrap();
        let expected = (100.0 * 100.0) / (101.3 - 13.35615);
        assert!((result.val - expected).abs() < 1e-9);
        // ~113.7 kg for 100 kg x 5
        assert!((result.val - 113.71).abs() < 0.01);
    }

    #[test]
    fn test_aux_mult_is_inverse_scaled() {
        let calc = McGlothin::new(LiftOptions::new().reps(5.0).lifted_weight(100.0));
        let mult = calc.compute_multiplier().unwrap();
        let result = calc.compute().unwrap();
        assert_eq!(result.mult, Some(100.0 / mult));
    }

    #[test]
    fn test_single_rep() {
        let calc = McGlothin::new(LiftOptions::new().reps(1.0).lifted_weight(100.0));
        assert_eq!(calc.compute_multiplier().unwrap(), 1.0);
    }

    #[test]
    fn test_missing_inputs() {
        let err = McGlothin::new(LiftOptions::new().lifted_weight(100.0)).compute().unwrap_err();
        assert_eq!(err.step(), Some(Step::Multiplier));

        let err = McGlothin::new(LiftOptions::new()).compute_multiplier().unwrap_err();
        assert!(err.to_string().contains("McGlothin"));
    }

    #[test]
    fn test_missing_lifted_weight_fails_main_step() {
        let calc = McGlothin::new(LiftOptions::new().reps(5.0));
        assert!(calc.compute_multiplier().is_ok());

        let err = calc.compute().unwrap_err();
        assert_eq!(err.step(), Some(Step::Main));
        match err {
            CalcError::MissingRequiredInput { missing, .. } => assert_eq!(missing, vec![Input::LiftedWeight]),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

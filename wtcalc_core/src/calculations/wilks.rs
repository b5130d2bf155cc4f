//! # Wilks Score
//!
//! The Wilks coefficient is `500 / P(bodyWeight)`, where `P` is a fifth
//! degree polynomial whose coefficients depend on the lifter's sex:
//!
//! ```text
//! P(x) = a + b*x + c*x^2 + d*x^3 + e*x^4 + f*x^5
//! ```
//!
//! The coefficient is this calculator's multiplier and the score is
//! `liftedWeight * multiplier`. Coefficients come from an injected
//! [`WilksTable`]; `WilksTable::standard()` holds the published values.

use crate::calculations::{CalcOutput, Calculator};
use crate::definitions::{Definitions, WilksTable};
use crate::errors::{CalcError, CalcResult, Step};
use crate::options::{Input, LiftOptions};

/// Wilks calculator for a lifted total.
#[derive(Debug, Clone, PartialEq)]
pub struct Wilks {
    options: LiftOptions,
    table: WilksTable,
}

impl Wilks {
    /// Build with an explicit coefficient table.
    pub fn new(options: LiftOptions, table: WilksTable) -> Self {
        Wilks { options, table }
    }

    /// Build with the published Wilks coefficients.
    pub fn standard(options: LiftOptions) -> Self {
        Self::new(options, WilksTable::standard())
    }

    /// Build with the standard table overlaid by `defs.wilks`.
    pub fn with_definitions(options: LiftOptions, defs: &Definitions) -> Self {
        Self::new(options, WilksTable::resolve(defs))
    }
}

/// Evaluate `coeffs[0] + coeffs[1]*x + ...` by Horner's rule.
fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

impl Calculator for Wilks {
    fn display_name(&self) -> String {
        "Wilks".to_string()
    }

    fn options(&self) -> &LiftOptions {
        &self.options
    }

    fn required_inputs(&self, step: Step) -> Vec<Input> {
        match step {
            Step::Multiplier => vec![Input::BodyWeight, Input::Sex],
            Step::Main => vec![Input::LiftedWeight],
        }
    }

    fn compute_multiplier(&self) -> CalcResult<f64> {
        self.require(Step::Multiplier)?;
        let body_weight = self.input(Step::Multiplier, Input::BodyWeight)?;
        let sex = self.options.sex.ok_or_else(|| {
            CalcError::missing_required_input(self.display_name(), Step::Multiplier, vec![Input::Sex])
        })?;

        Ok(500.0 / polynomial(&self.table.get(sex), body_weight))
    }

    fn compute(&self) -> CalcResult<CalcOutput> {
        self.require(Step::Main)?;
        let lifted_weight = self.input(Step::Main, Input::LiftedWeight)?;

        let mult = self.compute_multiplier()?;
        let output = CalcOutput::new(lifted_weight * mult).with_mult(mult);

        log::debug!(
            "Wilks: {} at {:?} bw ({:?}) -> {:.2}",
            lifted_weight,
            self.options.body_weight,
            self.options.sex,
            output.val
        );
        Ok(output)
    }
}

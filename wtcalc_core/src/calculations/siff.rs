//! # Siff Score
//!
//! Body-weight normalized strength for the powerlifting total or a single
//! lift. The multiplier is a power law in body weight,
//!
//! ```text
//! multiplier = a - b * bodyWeight^c
//! ```
//!
//! with `[a, b, c]` taken from a [`SiffTable`] for the chosen [`SiffLift`].
//! The score is `(liftedValue / multiplier) * 100` and
//! `bodyweightEquivalentPct = 100 / multiplier`.
//!
//! A body weight of zero with a negative exponent gives an infinite
//! power term; the result is returned unchanged.
//!
//! Siff is age-adjustable through [`AgeAdjustable`](super::AgeAdjustable):
//!
//! ```rust
//! use wtcalc_core::calculations::{AgeAdjustable, Calculator, NoAgeCorrection, Siff};
//! use wtcalc_core::definitions::SiffLift;
//! use wtcalc_core::options::LiftOptions;
//!
//! let opts = LiftOptions::new().body_weight(80.0).lifted_weight(600.0).age(30.0);
//! let calc = Siff::standard(opts, SiffLift::Total).age_adjusted(NoAgeCorrection);
//! let result = calc.compute().unwrap();
//! assert_eq!(result.age_factor, Some(1.0));
//! ```

use crate::calculations::{CalcOutput, Calculator};
use crate::definitions::{Definitions, SiffLift, SiffTable};
use crate::errors::{CalcResult, Step};
use crate::options::{Input, LiftOptions};

/// Siff calculator for one lift (or the total).
#[derive(Debug, Clone, PartialEq)]
pub struct Siff {
    options: LiftOptions,
    lift: SiffLift,
    table: SiffTable,
}

impl Siff {
    /// Build with an explicit coefficient table.
    pub fn new(options: LiftOptions, lift: SiffLift, table: SiffTable) -> Self {
        Siff { options, lift, table }
    }

    /// Build with Siff's published coefficients.
    pub fn standard(options: LiftOptions, lift: SiffLift) -> Self {
        Self::new(options, lift, SiffTable::standard())
    }

    /// Build with the standard table overlaid by `defs.siff`.
    pub fn with_definitions(options: LiftOptions, lift: SiffLift, defs: &Definitions) -> Self {
        Self::new(options, lift, SiffTable::resolve(defs))
    }

    /// The lift this calculator scores
    pub fn lift(&self) -> SiffLift {
        self.lift
    }

    /// The resolved coefficient table
    pub fn table(&self) -> &SiffTable {
        &self.table
    }
}

impl Calculator for Siff {
    fn display_name(&self) -> String {
        format!("Siff ({})", self.lift)
    }

    fn options(&self) -> &LiftOptions {
        &self.options
    }

    fn required_inputs(&self, step: Step) -> Vec<Input> {
        match step {
            Step::Multiplier => vec![Input::BodyWeight],
            Step::Main => vec![self.lift.weight_input()],
        }
    }

    fn compute_multiplier(&self) -> CalcResult<f64> {
        self.require(Step::Multiplier)?;
        let body_weight = self.input(Step::Multiplier, Input::BodyWeight)?;

        let [a, b, c] = self.table.get(self.lift);
        Ok(a - b * body_weight.powf(c))
    }

    fn compute(&self) -> CalcResult<CalcOutput> {
        self.require(Step::Main)?;
        let lifted = self.input(Step::Main, self.lift.weight_input())?;

        let mult = self.compute_multiplier()?;
        let output = CalcOutput::new((lifted / mult) * 100.0).with_bodyweight_equivalent_pct(100.0 / mult);

        log::debug!(
            "Siff ({}): {} at {:?} bw -> {:.2}",
            self.lift,
            lifted,
            self.options.body_weight,
            output.val
        );
        Ok(output)
    }
}

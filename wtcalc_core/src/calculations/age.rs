//! # Age Adjustment
//!
//! An age correction is a decorator, not a calculator of its own:
//! [`AgeAdjusted`] wraps any [`Calculator`] and, when the options carry an
//! `age`, scales the wrapped result's `val` by [`AgeCurve::factor`].
//! Required inputs and the multiplier step are the wrapped calculator's.
//!
//! No particular published curve is built in. [`NoAgeCorrection`] is the
//! identity; [`AgeFactorTable`] is a configurable curve that is the
//! identity inside a reference adult range and interpolates configured
//! factors outside it. Any `Fn(f64) -> f64` is also an [`AgeCurve`].
//!
//! ## Example
//!
//! ```rust
//! use wtcalc_core::calculations::{AgeAdjustable, AgeFactorTable, Calculator, Siff};
//! use wtcalc_core::definitions::SiffLift;
//! use wtcalc_core::options::LiftOptions;
//!
//! let curve = AgeFactorTable::new(23.0, 40.0, vec![(23.0, 1.0), (40.0, 1.0), (60.0, 1.4)]).unwrap();
//! let opts = LiftOptions::new().body_weight(80.0).lifted_weight(500.0).age(50.0);
//! let calc = Siff::standard(opts, SiffLift::Total).age_adjusted(curve);
//! let result = calc.compute().unwrap();
//! assert!((result.age_factor.unwrap() - 1.2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{CalcOutput, Calculator};
use crate::errors::{CalcError, CalcResult, Step};
use crate::options::{Input, LiftOptions};

/// Maps an age in years to a correction factor applied to `val`.
pub trait AgeCurve {
    fn factor(&self, age: f64) -> f64;
}

impl<F> AgeCurve for F
where
    F: Fn(f64) -> f64,
{
    fn factor(&self, age: f64) -> f64 {
        self(age)
    }
}

/// Identity curve: every age gets factor 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoAgeCorrection;

impl AgeCurve for NoAgeCorrection {
    fn factor(&self, _age: f64) -> f64 {
        1.0
    }
}

/// Piecewise-linear age curve.
///
/// Inside `[from, to]` the factor is exactly 1. Outside, the factor is
/// linearly interpolated between the `(age, factor)` points and held
/// constant beyond the first and last point.
///
/// ## JSON Example
///
/// ```json
/// { "from": 23, "to": 40, "points": [[14, 1.23], [23, 1.0], [40, 1.0], [80, 2.0]] }
/// ```
///
/// Tables are checked when built or deserialized, so an existing table
/// always has `from <= to` and points in strictly increasing age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AgeFactorTableDef")]
pub struct AgeFactorTable {
    from: f64,
    to: f64,
    points: Vec<(f64, f64)>,
}

/// Unchecked wire form of [`AgeFactorTable`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AgeFactorTableDef {
    from: f64,
    to: f64,
    #[serde(default)]
    points: Vec<(f64, f64)>,
}

impl TryFrom<AgeFactorTableDef> for AgeFactorTable {
    type Error = CalcError;

    fn try_from(def: AgeFactorTableDef) -> Result<Self, Self::Error> {
        AgeFactorTable::new(def.from, def.to, def.points)
    }
}

impl AgeFactorTable {
    /// Create a table, rejecting reversed ranges and unsorted points.
    pub fn new(from: f64, to: f64, points: Vec<(f64, f64)>) -> CalcResult<Self> {
        if from > to {
            return Err(CalcError::invalid_definition(
                "age",
                format!("reference range {}..{} is reversed", from, to),
            ));
        }
        if points.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(CalcError::invalid_definition(
                "age",
                "points must be sorted by strictly increasing age",
            ));
        }
        Ok(AgeFactorTable { from, to, points })
    }

    /// `(from, to)` ages of the reference range
    pub fn reference_range(&self) -> (f64, f64) {
        (self.from, self.to)
    }

    /// `(age, factor)` points sorted by age
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    fn interpolate(&self, age: f64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 1.0,
        };

        if age <= first.0 {
            return first.1;
        }
        if age >= last.0 {
            return last.1;
        }

        for w in self.points.windows(2) {
            let ((a0, f0), (a1, f1)) = (w[0], w[1]);
            if age <= a1 {
                return f0 + (f1 - f0) * (age - a0) / (a1 - a0);
            }
        }
        last.1
    }
}

impl AgeCurve for AgeFactorTable {
    fn factor(&self, age: f64) -> f64 {
        if age >= self.from && age <= self.to {
            return 1.0;
        }
        self.interpolate(age)
    }
}

/// A calculator with an age correction composed on top.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeAdjusted<C, A> {
    inner: C,
    curve: A,
}

impl<C: Calculator, A: AgeCurve> AgeAdjusted<C, A> {
    /// Wrap `inner`, scaling its `val` by `curve` when an age is given.
    pub fn new(inner: C, curve: A) -> Self {
        AgeAdjusted { inner, curve }
    }

    /// The wrapped calculator
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Calculator, A: AgeCurve> Calculator for AgeAdjusted<C, A> {
    fn display_name(&self) -> String {
        self.inner.display_name()
    }

    fn options(&self) -> &LiftOptions {
        self.inner.options()
    }

    fn required_inputs(&self, step: Step) -> Vec<Input> {
        self.inner.required_inputs(step)
    }

    fn compute_multiplier(&self) -> CalcResult<f64> {
        self.inner.compute_multiplier()
    }

    fn compute(&self) -> CalcResult<CalcOutput> {
        let output = self.inner.compute()?;

        let Some(age) = self.options().age else {
            return Ok(output);
        };

        let factor = self.curve.factor(age);
        log::debug!("{}: age {} factor {:.4}", self.display_name(), age, factor);

        Ok(CalcOutput {
            val: output.val * factor,
            ..output
        }
        .with_age_factor(factor))
    }
}

/// Compose an age correction onto any calculator.
pub trait AgeAdjustable: Calculator + Sized {
    fn age_adjusted<A: AgeCurve>(self, curve: A) -> AgeAdjusted<Self, A> {
        AgeAdjusted::new(self, curve)
    }
}

impl<C: Calculator> AgeAdjustable for C {}

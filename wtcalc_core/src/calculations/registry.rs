//! # Calculator Registry
//!
//! Selects a calculator by name and builds it behind the [`Calculator`]
//! trait object, wiring in the coefficient tables and age curve from a
//! [`Definitions`] value.
//!
//! ```rust
//! use wtcalc_core::calculations::CalculatorKind;
//! use wtcalc_core::definitions::Definitions;
//! use wtcalc_core::options::LiftOptions;
//!
//! let kind: CalculatorKind = "mcglothin".parse().unwrap();
//! let calc = kind.build(LiftOptions::new().reps(5.0).lifted_weight(100.0), &Definitions::new());
//! assert!(calc.compute().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::{AgeAdjustable, Brzycki, Calculator, McGlothin, NoAgeCorrection, Siff, Wathan, Wilks};
use crate::definitions::{Definitions, SiffLift};
use crate::errors::CalcError;
use crate::options::LiftOptions;

/// Every calculator the crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    Brzycki,
    #[serde(rename = "mcglothin")]
    McGlothin,
    Wathan,
    SiffTotal,
    SiffSquat,
    SiffBench,
    SiffDead,
    Wilks,
}

impl CalculatorKind {
    /// Every kind, in menu order
    pub fn all() -> &'static [CalculatorKind] {
        &[
            CalculatorKind::Brzycki,
            CalculatorKind::McGlothin,
            CalculatorKind::Wathan,
            CalculatorKind::SiffTotal,
            CalculatorKind::SiffSquat,
            CalculatorKind::SiffBench,
            CalculatorKind::SiffDead,
            CalculatorKind::Wilks,
        ]
    }

    /// The rep-based 1RM estimators
    pub fn one_rep_max() -> &'static [CalculatorKind] {
        &[CalculatorKind::Brzycki, CalculatorKind::McGlothin, CalculatorKind::Wathan]
    }

    /// The Siff kind scoring `lift`
    pub fn siff(lift: SiffLift) -> Self {
        match lift {
            SiffLift::Squat => CalculatorKind::SiffSquat,
            SiffLift::Bench => CalculatorKind::SiffBench,
            SiffLift::Dead => CalculatorKind::SiffDead,
            SiffLift::Total => CalculatorKind::SiffTotal,
        }
    }

    /// The Siff lift for Siff kinds
    pub fn siff_lift(&self) -> Option<SiffLift> {
        match self {
            CalculatorKind::SiffTotal => Some(SiffLift::Total),
            CalculatorKind::SiffSquat => Some(SiffLift::Squat),
            CalculatorKind::SiffBench => Some(SiffLift::Bench),
            CalculatorKind::SiffDead => Some(SiffLift::Dead),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CalculatorKind::Brzycki => "brzycki",
            CalculatorKind::McGlothin => "mcglothin",
            CalculatorKind::Wathan => "wathan",
            CalculatorKind::SiffTotal => "siff-total",
            CalculatorKind::SiffSquat => "siff-squat",
            CalculatorKind::SiffBench => "siff-bench",
            CalculatorKind::SiffDead => "siff-dead",
            CalculatorKind::Wilks => "wilks",
        }
    }

    /// Build the calculator.
    ///
    /// Siff calculators are age-adjusted with `defs.age` when present, and
    /// with [`NoAgeCorrection`] otherwise.
    pub fn build(&self, options: LiftOptions, defs: &Definitions) -> Box<dyn Calculator> {
        match self {
            CalculatorKind::Brzycki => Box::new(Brzycki::new(options)),
            CalculatorKind::McGlothin => Box::new(McGlothin::new(options)),
            CalculatorKind::Wathan => Box::new(Wathan::new(options)),
            CalculatorKind::Wilks => Box::new(Wilks::with_definitions(options, defs)),
            CalculatorKind::SiffTotal
            | CalculatorKind::SiffSquat
            | CalculatorKind::SiffBench
            | CalculatorKind::SiffDead => {
                let lift = self.siff_lift().unwrap_or_default();
                let siff = Siff::with_definitions(options, lift, defs);
                let calc: Box<dyn Calculator> = match &defs.age {
                    Some(table) => Box::new(siff.age_adjusted(table.clone())),
                    None => Box::new(siff.age_adjusted(NoAgeCorrection)),
                };
                calc
            }
        }
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "siff" => Ok(CalculatorKind::SiffTotal),
            "siff-deadlift" => Ok(CalculatorKind::SiffDead),
            other => CalculatorKind::all()
                .iter()
                .copied()
                .find(|kind| kind.name() == other)
                .ok_or_else(|| CalcError::unknown_calculator(s)),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::AgeFactorTable;
    use crate::errors::Step;
    use crate::options::Sex;

    #[test]
    fn test_parse_names() {
        for kind in CalculatorKind::all() {
            assert_eq!(kind.name().parse::<CalculatorKind>().unwrap(), *kind);
        }
        assert_eq!("Siff".parse::<CalculatorKind>().unwrap(), CalculatorKind::SiffTotal);
        assert_eq!("SIFF_SQUAT".parse::<CalculatorKind>().unwrap(), CalculatorKind::SiffSquat);
        assert_eq!(
            "epley".parse::<CalculatorKind>().unwrap_err().error_code(),
            "UNKNOWN_CALCULATOR"
        );
    }

    #[test]
    fn test_serde_names_match_display() {
        for kind in CalculatorKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_build_display_names() {
        let defs = Definitions::new();
        let opts = LiftOptions::new();
        assert_eq!(CalculatorKind::Wathan.build(opts, &defs).display_name(), "Wathan");
        assert_eq!(CalculatorKind::SiffBench.build(opts, &defs).display_name(), "Siff (bench)");
    }

    #[test]
    fn test_build_matches_direct_construction() {
        let opts = LiftOptions::new().reps(6.0).lifted_weight(110.0);
        let built = CalculatorKind::Brzycki.build(opts, &Definitions::new());
        assert_eq!(built.compute().unwrap(), Brzycki::new(opts).compute().unwrap());
    }

    #[test]
    fn test_build_siff_uses_age_definitions() {
        let defs = Definitions::new().with_age_table(AgeFactorTable::new(20.0, 40.0, vec![(40.0, 1.0), (60.0, 1.5)]).unwrap());
        let opts = LiftOptions::new().body_weight(90.0).lifted_weight(650.0).age(60.0);

        let adjusted = CalculatorKind::SiffTotal.build(opts, &defs).compute().unwrap();
        let plain = Siff::standard(opts, SiffLift::Total).compute().unwrap();
        assert_eq!(adjusted.age_factor, Some(1.5));
        assert!((adjusted.val - plain.val * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_build_wilks_requires_sex() {
        let opts = LiftOptions::new().body_weight(90.0).lifted_weight(650.0);
        let calc = CalculatorKind::Wilks.build(opts, &Definitions::new());
        assert_eq!(calc.compute().unwrap_err().step(), Some(Step::Multiplier));

        let calc = CalculatorKind::Wilks.build(opts.sex(Sex::Male), &Definitions::new());
        assert!(calc.compute().is_ok());
    }
}

//! # Reports
//!
//! A report runs every calculator relevant to a [`Mode`] against one set of
//! options and keeps each outcome, so one missing input does not hide the
//! results that could be computed.
//!
//! - `onerm` - Brzycki, McGlothin and Wathan 1RM estimates
//! - `wilks` - Wilks and Siff (total) scores, plus Siff for every single
//!   lift whose weight is present
//!
//! ## Example
//!
//! ```rust
//! use wtcalc_core::definitions::Definitions;
//! use wtcalc_core::options::LiftOptions;
//! use wtcalc_core::report::{Mode, Report};
//!
//! let opts = LiftOptions::new().reps(5.0).lifted_weight(100.0);
//! let report = Report::run(Mode::Onerm, opts, &Definitions::new());
//! assert_eq!(report.entries.len(), 3);
//! assert!(report.entries.iter().all(|e| e.is_ok()));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::{CalcOutput, CalculatorKind};
use crate::definitions::{Definitions, SiffLift};
use crate::errors::CalcError;
use crate::options::LiftOptions;

/// Top-level calculator menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One rep maximum estimates
    #[default]
    Onerm,
    /// Body-weight normalized scores
    Wilks,
}

impl Mode {
    /// Name used on the command line and in preferences
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Onerm => "onerm",
            Mode::Wilks => "wilks",
        }
    }

    /// Heading shown above the report
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Onerm => "One Rep Maximum",
            Mode::Wilks => "Wilks Score",
        }
    }

    /// Calculators shown for this mode with the given options.
    pub fn calculators(&self, options: &LiftOptions) -> Vec<CalculatorKind> {
        match self {
            Mode::Onerm => CalculatorKind::one_rep_max().to_vec(),
            Mode::Wilks => {
                let mut kinds = vec![CalculatorKind::Wilks, CalculatorKind::SiffTotal];
                kinds.extend(
                    [SiffLift::Squat, SiffLift::Bench, SiffLift::Dead]
                        .into_iter()
                        .filter(|lift| options.has(lift.weight_input()))
                        .map(CalculatorKind::siff),
                );
                kinds
            }
        }
    }
}

impl FromStr for Mode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "onerm" | "1rm" => Ok(Mode::Onerm),
            "wilks" => Ok(Mode::Wilks),
            _ => Err(CalcError::unknown_calculator(s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(CalcOutput),
    Error(CalcError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub calculator: CalculatorKind,
    pub name: String,
    pub outcome: Outcome,
}

impl ReportEntry {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Result(_))
    }

    /// The output, if the calculator succeeded
    pub fn output(&self) -> Option<&CalcOutput> {
        match &self.outcome {
            Outcome::Result(output) => Some(output),
            Outcome::Error(_) => None,
        }
    }
}

/// Results of every calculator in a mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub mode: Mode,
    pub options: LiftOptions,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Run every calculator of `mode`.
    pub fn run(mode: Mode, options: LiftOptions, defs: &Definitions) -> Self {
        let kinds = mode.calculators(&options);
        Report {
            mode,
            options,
            entries: run_calculators(&kinds, options, defs),
        }
    }

    /// Run a single calculator, reported under the mode it belongs to.
    pub fn single(kind: CalculatorKind, options: LiftOptions, defs: &Definitions) -> Self {
        let mode = if CalculatorKind::one_rep_max().contains(&kind) {
            Mode::Onerm
        } else {
            Mode::Wilks
        };
        Report {
            mode,
            options,
            entries: run_calculators(&[kind], options, defs),
        }
    }

    /// True if any calculator failed
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| !e.is_ok())
    }
}

fn run_calculators(kinds: &[CalculatorKind], options: LiftOptions, defs: &Definitions) -> Vec<ReportEntry> {
    kinds
        .iter()
        .map(|&kind| {
            let calc = kind.build(options, defs);
            let outcome = match calc.compute() {
                Ok(output) => Outcome::Result(output),
                Err(e) => {
                    log::debug!("{} skipped: {}", kind, e);
                    Outcome::Error(e)
                }
            };
            ReportEntry {
                calculator: kind,
                name: calc.display_name(),
                outcome,
            }
        })
        .collect()
}

/// Round for display.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Step;
    use crate::options::Sex;

    #[test]
    fn test_onerm_report() {
        let opts = LiftOptions::new().reps(10.0).lifted_weight(100.0);
        let report = Report::run(Mode::Onerm, opts, &Definitions::new());
        let names: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Brzycki", "McGlothin", "Wathan"]);
        assert!(!report.has_errors());
        let brzycki = report.entries[0].output().unwrap();
        assert_eq!(round_to(brzycki.val, 2), 133.33);
    }

    #[test]
    fn test_report_keeps_going_after_failure() {
        let opts = LiftOptions::new().body_weight(80.0).lifted_weight(600.0);
        let report = Report::run(Mode::Wilks, opts, &Definitions::new());

        assert_eq!(report.entries.len(), 2);
        assert!(report.has_errors());
        match &report.entries[0].outcome {
            Outcome::Error(e) => assert_eq!(e.step(), Some(Step::Multiplier)),
            other => panic!("expected Wilks to fail without sex: {:?}", other),
        }
        assert!(report.entries[1].is_ok());
    }

    #[test]
    fn test_wilks_mode_includes_present_lifts() {
        let opts = LiftOptions::new()
            .body_weight(80.0)
            .lifted_weight(600.0)
            .squat_weight(220.0)
            .dead_weight(250.0)
            .sex(Sex::Female);
        let kinds = Mode::Wilks.calculators(&opts);
        assert_eq!(
            kinds,
            vec![
                CalculatorKind::Wilks,
                CalculatorKind::SiffTotal,
                CalculatorKind::SiffSquat,
                CalculatorKind::SiffDead
            ]
        );
        assert!(!Report::run(Mode::Wilks, opts, &Definitions::new()).has_errors());
    }

    #[test]
    fn test_single_report_mode() {
        let opts = LiftOptions::new().body_weight(80.0).bench_weight(140.0);
        let report = Report::single(CalculatorKind::SiffBench, opts, &Definitions::new());
        assert_eq!(report.mode, Mode::Wilks);
        assert_eq!(report.entries.len(), 1);
        assert!(report.entries[0].is_ok());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("ONERM".parse::<Mode>().unwrap(), Mode::Onerm);
        assert_eq!("wilks".parse::<Mode>().unwrap(), Mode::Wilks);
        assert!("sinclair".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Onerm);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(113.7088, 1), 113.7);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}

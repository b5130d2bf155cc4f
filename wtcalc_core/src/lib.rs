//! # wtcalc_core - Weight Training Calculators
//!
//! `wtcalc_core` estimates one-repetition maximums (Brzycki, McGlothin,
//! Wathan) and body-weight normalized strength scores (Siff, Wilks) from
//! raw training numbers. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a calculator is its options plus its coefficient table
//! - **One contract**: every formula implements [`Calculator`]
//! - **Composable**: age correction wraps any calculator
//! - **No hidden defaults**: coefficient tables are injected at construction
//!
//! ## Quick Start
//!
//! ```rust
//! use wtcalc_core::{Calculator, CalculatorKind, Definitions, LiftOptions};
//!
//! let opts = LiftOptions::new().reps(5.0).lifted_weight(100.0);
//! let calc = CalculatorKind::Brzycki.build(opts, &Definitions::new());
//! let result = calc.compute().unwrap();
//! assert_eq!(result.val, 112.5);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculator contract and all formulas
//! - [`options`] - Typed inputs
//! - [`definitions`] - Coefficient tables and overrides
//! - [`report`] - Run every calculator of a menu mode
//! - [`preferences`] - Persisted last-selected mode
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod definitions;
pub mod errors;
pub mod options;
pub mod preferences;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalcOutput, Calculator, CalculatorKind};
pub use definitions::{load_definitions, Definitions, SiffLift, SiffTable, WilksTable};
pub use errors::{CalcError, CalcResult, Step};
pub use options::{Input, LiftOptions, Sex};
pub use preferences::{load_preferences, save_preferences, Preferences};
pub use report::{Mode, Report};

//! # Coefficient Definitions
//!
//! Coefficient tables for the table-driven formulas and the override
//! mapping that replaces them. Built-in tables are plain constructors
//! (`SiffTable::standard()`, `WilksTable::standard()`); nothing is read from
//! global state. A [`Definitions`] value only carries what the caller wants
//! to change, and each table merges it over its defaults.
//!
//! ## File Format
//!
//! Definitions can be loaded from TOML or JSON. Only the entries present
//! are overridden:
//!
//! ```toml
//! [siff]
//! total = [1270.4, 172970, -1.3925]
//!
//! [wilks]
//! female = [594.31747775582, -27.23842536447, 0.82112226871, -0.00930733913, 4.731582e-5, -9.054e-8]
//!
//! [age]
//! from = 23
//! to = 40
//! points = [[14, 1.23], [23, 1.0], [40, 1.0], [80, 2.0]]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::age::AgeFactorTable;
use crate::errors::{CalcError, CalcResult};
use crate::options::{Input, Sex};

/// Siff coefficients `[a, b, c]` for `a - b * bodyWeight^c`
pub type SiffCoefficients = [f64; 3];

/// Wilks polynomial coefficients `[a, b, c, d, e, f]`
pub type WilksCoefficients = [f64; 6];

/// The lift a Siff calculator scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiffLift {
    Squat,
    Bench,
    Dead,
    #[default]
    Total,
}

impl SiffLift {
    /// Every lift, total last
    pub fn all() -> &'static [SiffLift] {
        &[SiffLift::Squat, SiffLift::Bench, SiffLift::Dead, SiffLift::Total]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SiffLift::Squat => "squat",
            SiffLift::Bench => "bench",
            SiffLift::Dead => "dead",
            SiffLift::Total => "total",
        }
    }

    /// The option holding the lifted value for this lift.
    ///
    /// The total is read from `liftedWeight`, single lifts from `<lift>Weight`.
    pub fn weight_input(&self) -> Input {
        match self {
            SiffLift::Squat => Input::SquatWeight,
            SiffLift::Bench => Input::BenchWeight,
            SiffLift::Dead => Input::DeadWeight,
            SiffLift::Total => Input::LiftedWeight,
        }
    }
}

impl FromStr for SiffLift {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(SiffLift::Squat),
            "bench" => Ok(SiffLift::Bench),
            "dead" | "deadlift" => Ok(SiffLift::Dead),
            "total" => Ok(SiffLift::Total),
            _ => Err(CalcError::invalid_definition("siff", format!("unknown lift '{}'", s))),
        }
    }
}

impl fmt::Display for SiffLift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-lift Siff coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiffTable {
    pub squat: SiffCoefficients,
    pub bench: SiffCoefficients,
    pub dead: SiffCoefficients,
    pub total: SiffCoefficients,
}

impl SiffTable {
    /// Siff's published coefficients.
    pub fn standard() -> Self {
        SiffTable {
            squat: [638.01, 9517.7, -0.7911],
            bench: [408.15, 11047.0, -0.9371],
            dead: [433.14, 493825.0, -1.9712],
            total: [1270.4, 172970.0, -1.3925],
        }
    }

    /// Standard table with any overrides from `defs` applied lift by lift.
    pub fn resolve(defs: &Definitions) -> Self {
        let mut table = Self::standard();
        if let Some(overrides) = &defs.siff {
            table.apply(overrides);
        }
        table
    }

    fn apply(&mut self, overrides: &SiffOverrides) {
        for &lift in SiffLift::all() {
            if let Some(coeffs) = overrides.get(lift) {
                *self.get_mut(lift) = coeffs;
            }
        }
    }

    /// Coefficients for `lift`
    pub fn get(&self, lift: SiffLift) -> SiffCoefficients {
        match lift {
            SiffLift::Squat => self.squat,
            SiffLift::Bench => self.bench,
            SiffLift::Dead => self.dead,
            SiffLift::Total => self.total,
        }
    }

    fn get_mut(&mut self, lift: SiffLift) -> &mut SiffCoefficients {
        match lift {
            SiffLift::Squat => &mut self.squat,
            SiffLift::Bench => &mut self.bench,
            SiffLift::Dead => &mut self.dead,
            SiffLift::Total => &mut self.total,
        }
    }
}

impl Default for SiffTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Partial Siff table; absent lifts keep their standard coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiffOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squat: Option<SiffCoefficients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench: Option<SiffCoefficients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead: Option<SiffCoefficients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<SiffCoefficients>,
}

impl SiffOverrides {
    pub fn get(&self, lift: SiffLift) -> Option<SiffCoefficients> {
        match lift {
            SiffLift::Squat => self.squat,
            SiffLift::Bench => self.bench,
            SiffLift::Dead => self.dead,
            SiffLift::Total => self.total,
        }
    }
}

/// Sex-specific Wilks polynomial coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WilksTable {
    pub male: WilksCoefficients,
    pub female: WilksCoefficients,
}

impl WilksTable {
    /// The original published Wilks coefficients.
    pub fn standard() -> Self {
        WilksTable {
            male: [
                -216.0475144,
                16.2606339,
                -0.002388645,
                -0.00113732,
                7.01863e-06,
                -1.291e-08,
            ],
            female: [
                594.31747775582,
                -27.23842536447,
                0.82112226871,
                -0.00930733913,
                4.731582e-05,
                -9.054e-08,
            ],
        }
    }

    /// Standard table with `defs.wilks` rows swapped in.
    pub fn resolve(defs: &Definitions) -> Self {
        let mut table = Self::standard();
        if let Some(overrides) = &defs.wilks {
            if let Some(male) = overrides.male {
                table.male = male;
            }
            if let Some(female) = overrides.female {
                table.female = female;
            }
        }
        table
    }

    pub fn get(&self, sex: Sex) -> WilksCoefficients {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

impl Default for WilksTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WilksOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub male: Option<WilksCoefficients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female: Option<WilksCoefficients>,
}

/// Override mapping supplied alongside the options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definitions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siff: Option<SiffOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wilks: Option<WilksOverrides>,
    /// Age correction curve; without it no age correction is applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeFactorTable>,
}

impl Definitions {
    /// No overrides: every formula uses its standard table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the Siff coefficients for one lift.
    pub fn with_siff(mut self, lift: SiffLift, coeffs: SiffCoefficients) -> Self {
        let mut overrides = self.siff.unwrap_or_default();
        match lift {
            SiffLift::Squat => overrides.squat = Some(coeffs),
            SiffLift::Bench => overrides.bench = Some(coeffs),
            SiffLift::Dead => overrides.dead = Some(coeffs),
            SiffLift::Total => overrides.total = Some(coeffs),
        }
        self.siff = Some(overrides);
        self
    }

    /// Override the Wilks coefficients for one sex.
    pub fn with_wilks(mut self, sex: Sex, coeffs: WilksCoefficients) -> Self {
        let mut overrides = self.wilks.unwrap_or_default();
        match sex {
            Sex::Male => overrides.male = Some(coeffs),
            Sex::Female => overrides.female = Some(coeffs),
        }
        self.wilks = Some(overrides);
        self
    }

    /// Use `table` as the age correction curve. The table is already
    /// validated by [`AgeFactorTable::new`].
    pub fn with_age_table(mut self, table: AgeFactorTable) -> Self {
        self.age = Some(table);
        self
    }

    /// Parse TOML definitions.
    pub fn from_toml_str(s: &str) -> CalcResult<Self> {
        toml::from_str(s).map_err(|e| CalcError::serialization(format!("Invalid definitions TOML: {}", e)))
    }

    /// Parse JSON definitions.
    pub fn from_json_str(s: &str) -> CalcResult<Self> {
        serde_json::from_str(s).map_err(|e| CalcError::serialization(format!("Invalid definitions JSON: {}", e)))
    }
}

/// Load definitions from a `.toml` or `.json` file.
///
/// Any other extension is parsed as TOML.
pub fn load_definitions(path: &Path) -> CalcResult<Definitions> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let defs = if is_json {
        Definitions::from_json_str(&contents)?
    } else {
        Definitions::from_toml_str(&contents)?
    };

    log::debug!("loaded definitions from {}", path.display());
    Ok(defs)
}

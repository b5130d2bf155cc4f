//! # wtcalcs CLI
//!
//! Terminal front end for the weight training calculators. Runs every
//! calculator of the selected menu mode (or a single calculator) and prints
//! the results, optionally as JSON.
//!
//! The last used mode is remembered in a preferences file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wtcalc_core::calculations::CalculatorKind;
use wtcalc_core::definitions::{load_definitions, Definitions};
use wtcalc_core::options::{LiftOptions, Sex};
use wtcalc_core::preferences::{load_preferences, save_preferences, PREFERENCES_FILE};
use wtcalc_core::report::{round_to, Mode, Outcome, Report};

/// Estimate one rep maximums and Wilks/Siff scores.
#[derive(Parser, Debug)]
#[command(name = "wtcalc")]
#[command(about = "Weight training calculators: 1RM estimates, Wilks and Siff scores")]
#[command(version)]
struct Args {
    /// Calculator menu: onerm or wilks. Defaults to the last one used.
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Run a single calculator (brzycki, mcglothin, wathan, siff-total,
    /// siff-squat, siff-bench, siff-dead, wilks) instead of a whole menu.
    #[arg(short, long)]
    calc: Option<CalculatorKind>,

    /// Repetitions performed
    #[arg(short, long)]
    reps: Option<f64>,

    /// Weight lifted (the total for Wilks and Siff total)
    #[arg(short, long)]
    weight: Option<f64>,

    /// Body weight
    #[arg(short, long)]
    bodyweight: Option<f64>,

    #[arg(long)]
    squat: Option<f64>,

    #[arg(long)]
    bench: Option<f64>,

    #[arg(long)]
    dead: Option<f64>,

    /// Age in years
    #[arg(long)]
    age: Option<f64>,

    /// male or female
    #[arg(long)]
    sex: Option<Sex>,

    /// Coefficient overrides (TOML or JSON).
    /// Can also be set via WTCALCS_DEFS environment variable.
    #[arg(long, value_name = "FILE", env = "WTCALCS_DEFS")]
    defs: Option<PathBuf>,

    /// Preferences file.
    /// Can also be set via WTCALCS_PREFS environment variable.
    #[arg(long, value_name = "FILE", env = "WTCALCS_PREFS", default_value = PREFERENCES_FILE)]
    prefs: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn options(&self) -> LiftOptions {
        LiftOptions {
            reps: self.reps,
            lifted_weight: self.weight,
            body_weight: self.bodyweight,
            squat_weight: self.squat,
            bench_weight: self.bench,
            dead_weight: self.dead,
            age: self.age,
            sex: self.sex,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let defs = match &args.defs {
        Some(path) => load_definitions(path)
            .with_context(|| format!("Failed to load definitions: {}", path.display()))?,
        None => Definitions::new(),
    };

    let report = match args.calc {
        Some(kind) => Report::single(kind, args.options(), &defs),
        None => {
            let mode = resolve_mode(&args)?;
            Report::run(mode, args.options(), &defs)
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.entries.iter().all(|e| !e.is_ok()) {
        anyhow::bail!("no calculator could be evaluated with the given inputs");
    }

    Ok(())
}

/// Use the explicit mode and remember it, or fall back to the saved one.
fn resolve_mode(args: &Args) -> Result<Mode> {
    let prefs = match load_preferences(&args.prefs) {
        Ok(prefs) => prefs,
        Err(e) => {
            log::warn!("ignoring unreadable preferences: {}", e);
            Default::default()
        }
    };

    let Some(mode) = args.mode else {
        return Ok(prefs.main_menu_option);
    };

    if mode != prefs.main_menu_option {
        save_preferences(&prefs.with_mode(mode), &args.prefs)
            .with_context(|| format!("Failed to save preferences: {}", args.prefs.display()))?;
    }
    Ok(mode)
}

fn print_report(report: &Report) {
    println!("═══════════════════════════════════════");
    println!("  {}", report.mode.title().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();

    for entry in &report.entries {
        match &entry.outcome {
            Outcome::Result(output) => {
                let mut line = format!("  {:<14} {:>9.2}", entry.name, round_to(output.val, 2));
                if let Some(mult) = output.mult {
                    line.push_str(&format!("   mult {:.4}", mult));
                }
                if let Some(pct) = output.bodyweight_equivalent_pct {
                    line.push_str(&format!("   b/w {:.2}", pct));
                }
                if let Some(factor) = output.age_factor {
                    line.push_str(&format!("   age x{:.3}", factor));
                }
                println!("{}", line);
            }
            Outcome::Error(e) => {
                println!("  {:<14} [SKIPPED] {}", entry.name, e);
            }
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "wtcalc", "--mode", "wilks", "-w", "600", "-b", "82.5", "--sex", "female", "--squat", "210",
        ])
        .unwrap();
        assert_eq!(args.mode, Some(Mode::Wilks));
        let opts = args.options();
        assert_eq!(opts.lifted_weight, Some(600.0));
        assert_eq!(opts.body_weight, Some(82.5));
        assert_eq!(opts.squat_weight, Some(210.0));
        assert_eq!(opts.sex, Some(Sex::Female));
        assert_eq!(opts.reps, None);
    }

    #[test]
    fn test_parse_single_calculator() {
        let args = Args::try_parse_from(["wtcalc", "--calc", "siff-bench"]).unwrap();
        assert_eq!(args.calc, Some(CalculatorKind::SiffBench));
        assert!(Args::try_parse_from(["wtcalc", "--calc", "epley"]).is_err());
    }

    #[test]
    fn test_explicit_mode_is_saved() {
        let prefs = std::env::temp_dir().join("wtcalcs_cli_test_prefs.json");
        let _ = std::fs::remove_file(&prefs);
        let prefs_arg = prefs.display().to_string();

        let args = Args::try_parse_from(["wtcalc", "--mode", "wilks", "--prefs", &prefs_arg]).unwrap();
        assert_eq!(resolve_mode(&args).unwrap(), Mode::Wilks);

        let args = Args::try_parse_from(["wtcalc", "--prefs", &prefs_arg]).unwrap();
        assert_eq!(resolve_mode(&args).unwrap(), Mode::Wilks);

        let _ = std::fs::remove_file(&prefs);
    }
}

//! tdee: estimate total daily energy expenditure.
//! Re-exports all modules and contains `run()`: load config, validate, calculate, print.

pub mod biometrics;
pub mod cli;
pub mod config;
pub mod error;
pub mod formula;
pub mod report;
pub mod units;

use anyhow::Result;
use clap::CommandFactory;
use console::style;
use std::io::Write;

use cli::Cli;
use config::Config;
use report::Report;

pub use biometrics::{BiometricInput, Lifestyle, Measurements, Sex};
pub use error::ValidationError;
pub use formula::Formula;
pub use units::UnitSystem;

/// Validate raw measurements and compute the full report.
pub fn calculate(measurements: &Measurements) -> Result<Report, ValidationError> {
    let input = measurements.validate()?;
    Ok(Report::calculate(&input))
}

/// Run the CLI with parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "tdee", &mut std::io::stdout());
        return Ok(());
    }

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("warning: ignoring config ({e:#})")).yellow()
            );
            Config::default()
        }
    };

    let raw = !cli.json && (cli.raw || config.output.raw);
    let verbose = cli.verbose || config.output.verbose;

    let report = calculate(&cli.measurements())?;

    if verbose {
        eprintln!(
            "{} {}",
            style("Units:").bold(),
            style(report.input.units).dim()
        );
        eprintln!("{}", report.breakdown());
    }

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", report.to_json()?)?;
    } else if raw {
        // No trailing newline so the number can be piped as-is
        write!(stdout, "{}", report.render(true))?;
    } else {
        writeln!(stdout, "{}", report.render(false))?;
    }
    stdout.flush()?;

    Ok(())
}

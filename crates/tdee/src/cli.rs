//! CLI argument parsing with clap. Defines the `Cli` struct.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::biometrics::Measurements;

const LIFESTYLE_HELP: &str = "\
Valid lifestyle modifiers are:

  1.2   : Sedentary
  1.375 : Lightly Active
  1.55  : Moderately Active
  1.7   : Very Active
  1.9   : Extremely Active

Examples:
  tdee -m --height 172 --weight 63 --age 29 --sex male --lifestyle 1.375
  tdee -i --height 5.75 --weight 150 --age 40 --sex female --lifestyle 1.55 --raw";

#[derive(Parser)]
#[command(
    name = "tdee",
    version,
    about = "Calculate an estimate of your total daily energy expenditure",
    long_about = "Calculate an estimate of your total daily energy expenditure by averaging the \
basal metabolic rate estimates of three commonly used formulas: Mifflin-St Jeor, the original \
Harris-Benedict formula and the revised Harris-Benedict formula.\n\n\
The raw output is designed to be piped into other tools that compute a surplus or deficit.",
    after_help = LIFESTYLE_HELP
)]
pub struct Cli {
    /// Height (feet with --imperial, centimetres with --metric)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Weight (pounds with --imperial, kilograms with --metric)
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<f64>,

    /// Sex used to pick formula coefficients (male or female)
    #[arg(long)]
    pub sex: Option<String>,

    /// Lifestyle modifier (activity multiplier)
    #[arg(long, allow_negative_numbers = true)]
    pub lifestyle: Option<f64>,

    /// Print only the number, without the kcal suffix
    #[arg(short, long)]
    pub raw: bool,

    /// Use metric units (cm/kg)
    #[arg(short, long, conflicts_with = "imperial")]
    pub metric: bool,

    /// Use imperial units (ft/lb)
    #[arg(short, long)]
    pub imperial: bool,

    /// Print the full calculation as JSON
    #[arg(long, conflicts_with = "raw")]
    pub json: bool,

    /// Show each formula's estimate on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file (default: ~/.config/tdee/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// The measurement flags, still unvalidated.
    pub fn measurements(&self) -> Measurements {
        Measurements {
            height: self.height,
            weight: self.weight,
            age: self.age,
            lifestyle: self.lifestyle,
            sex: self.sex.clone(),
            metric: self.metric,
            imperial: self.imperial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unit_flags_conflict() {
        let res = Cli::try_parse_from(["tdee", "-m", "-i"]);
        assert!(res.is_err());
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let cli = Cli::try_parse_from(["tdee", "-m", "--age", "-3"]).unwrap();
        assert_eq!(cli.age, Some(-3.0));
    }

    #[test]
    fn measurements_copy_every_flag() {
        let cli = Cli::try_parse_from([
            "tdee",
            "-i",
            "--height",
            "6",
            "--weight",
            "180",
            "--age",
            "35",
            "--sex",
            "Female",
            "--lifestyle",
            "1.9",
        ])
        .unwrap();
        let m = cli.measurements();
        assert!(m.imperial && !m.metric);
        assert_eq!(m.height, Some(6.0));
        assert_eq!(m.weight, Some(180.0));
        assert_eq!(m.age, Some(35.0));
        assert_eq!(m.sex.as_deref(), Some("Female"));
        assert_eq!(m.lifestyle, Some(1.9));
    }
}

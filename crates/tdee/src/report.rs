//! Aggregation of the BMR estimates into a TDEE figure, plus its text, JSON and table renderings.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::biometrics::BiometricInput;
use crate::formula::Formula;

#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub formula: Formula,
    pub bmr: f64,
}

/// Result of one calculation: the inputs, every estimate, and the TDEE derived from them.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: BiometricInput,
    pub estimates: Vec<Estimate>,
    pub mean_bmr: f64,
    pub multiplier: f64,
    pub tdee: f64,
}

impl Report {
    /// Evaluate every formula and average them.
    pub fn calculate(input: &BiometricInput) -> Self {
        let estimates: Vec<Estimate> = Formula::ALL
            .into_iter()
            .map(|formula| Estimate {
                formula,
                bmr: formula.bmr(input),
            })
            .collect();

        let mean_bmr = estimates.iter().map(|e| e.bmr).sum::<f64>() / estimates.len() as f64;
        let multiplier = input.lifestyle.multiplier();

        Report {
            input: *input,
            estimates,
            mean_bmr,
            multiplier,
            tdee: mean_bmr * multiplier,
        }
    }

    /// TDEE rounded to whole kilocalories.
    pub fn kcal(&self) -> String {
        format!("{:.0}", self.tdee)
    }

    /// The stdout line: `2179` when raw, `2179 kcal` otherwise.
    pub fn render(&self, raw: bool) -> String {
        if raw {
            self.kcal()
        } else {
            format!("{} kcal", self.kcal())
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Per-formula table shown with `--verbose`.
    pub fn breakdown(&self) -> String {
        use tabled::settings::{Format, Modify, Style, object::Rows};

        let mut rows: Vec<[String; 2]> = Vec::with_capacity(self.estimates.len() + 4);
        rows.push(["FORMULA".to_string(), "KCAL/DAY".to_string()]);
        for e in &self.estimates {
            rows.push([e.formula.name().to_string(), format!("{:.1}", e.bmr)]);
        }
        rows.push(["Mean BMR".to_string(), format!("{:.1}", self.mean_bmr)]);
        rows.push([
            format!("× {}", self.input.lifestyle.label()),
            format!("{}", self.multiplier),
        ]);
        rows.push(["TDEE".to_string(), self.kcal()]);

        tabled::Table::from_iter(rows)
            .with(Style::blank())
            .with(Modify::new(Rows::first()).with(Format::content(|s| style(s).bold().to_string())))
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biometrics::{Lifestyle, Measurements, Sex};
    use crate::units::UnitSystem;

    fn metric_male() -> BiometricInput {
        BiometricInput {
            units: UnitSystem::Metric,
            height_cm: 172.0,
            weight_kg: 63.0,
            age: 29.0,
            sex: Sex::Male,
            lifestyle: Lifestyle::LightlyActive,
        }
    }

    #[test]
    fn reference_male_tdee() {
        let report = Report::calculate(&metric_male());
        assert_eq!(report.estimates.len(), 3);
        assert!((report.mean_bmr - 1584.8434666).abs() < 1e-4);
        assert_eq!(report.multiplier, 1.375);
        insta::assert_snapshot!(report.render(false), @"2179 kcal");
        insta::assert_snapshot!(report.render(true), @"2179");
    }

    #[test]
    fn reference_female_tdee() {
        let input = BiometricInput {
            sex: Sex::Female,
            ..metric_male()
        };
        assert_eq!(Report::calculate(&input).kcal(), "1960");
    }

    #[test]
    fn raw_output_has_no_suffix() {
        let report = Report::calculate(&metric_male());
        assert!(!report.render(true).contains("kcal"));
        assert!(report.render(false).contains("kcal"));
    }

    #[test]
    fn tdee_is_positive_across_levels_and_sexes() {
        for sex in [Sex::Male, Sex::Female] {
            for lifestyle in Lifestyle::ALL {
                let input = BiometricInput {
                    sex,
                    lifestyle,
                    ..metric_male()
                };
                assert!(Report::calculate(&input).tdee > 0.0);
            }
        }
    }

    #[test]
    fn imperial_and_metric_agree() {
        let imperial = Measurements {
            height: Some(5.75),
            weight: Some(150.0),
            age: Some(40.0),
            lifestyle: Some(1.55),
            sex: Some("male".into()),
            imperial: true,
            metric: false,
        };
        let metric = Measurements {
            height: Some(5.75 * 30.48),
            weight: Some(150.0 * 0.453592),
            imperial: false,
            metric: true,
            ..imperial.clone()
        };
        let a = Report::calculate(&imperial.validate().unwrap());
        let b = Report::calculate(&metric.validate().unwrap());
        assert!((a.tdee - b.tdee).abs() < 1e-9);
        assert_eq!(a.kcal(), "2481");
    }

    #[test]
    fn json_contains_every_estimate() {
        let json = Report::calculate(&metric_male()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"]["sex"], "male");
        assert_eq!(value["input"]["lifestyle"], "lightly-active");
        assert_eq!(value["input"]["units"], "metric");
        let formulas: Vec<&str> = value["estimates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["formula"].as_str().unwrap())
            .collect();
        assert_eq!(
            formulas,
            [
                "mifflin_st_jeor",
                "harris_benedict_original",
                "harris_benedict_revised"
            ]
        );
        assert!((value["tdee"].as_f64().unwrap() - 2179.1597).abs() < 1e-3);
    }

    #[test]
    fn breakdown_lists_formulas_and_total() {
        let table = Report::calculate(&metric_male()).breakdown();
        assert!(table.contains("Mifflin-St Jeor"));
        assert!(table.contains("Harris-Benedict (revised)"));
        assert!(table.contains("Lightly Active"));
        assert!(table.contains("2179"));
    }
}

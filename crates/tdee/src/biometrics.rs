//! Raw command-line measurements and the validated, metric `BiometricInput` built from them.

use serde::Serialize;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::units::UnitSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("male") {
            Ok(Sex::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Ok(Sex::Female)
        } else {
            Err(ValidationError::InvalidSex)
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Activity level, identified on the command line by its multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lifestyle {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl Lifestyle {
    pub const ALL: [Lifestyle; 5] = [
        Lifestyle::Sedentary,
        Lifestyle::LightlyActive,
        Lifestyle::ModeratelyActive,
        Lifestyle::VeryActive,
        Lifestyle::ExtremelyActive,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            Lifestyle::Sedentary => 1.2,
            Lifestyle::LightlyActive => 1.375,
            Lifestyle::ModeratelyActive => 1.55,
            Lifestyle::VeryActive => 1.7,
            Lifestyle::ExtremelyActive => 1.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lifestyle::Sedentary => "Sedentary",
            Lifestyle::LightlyActive => "Lightly Active",
            Lifestyle::ModeratelyActive => "Moderately Active",
            Lifestyle::VeryActive => "Very Active",
            Lifestyle::ExtremelyActive => "Extremely Active",
        }
    }

    /// Match a multiplier exactly against the known levels.
    pub fn from_multiplier(value: f64) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|l| l.multiplier() == value)
            .ok_or(ValidationError::InvalidLifestyleModifier)
    }
}

/// Everything the user typed, before any validation.
#[derive(Debug, Clone, Default)]
pub struct Measurements {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<f64>,
    pub lifestyle: Option<f64>,
    pub sex: Option<String>,
    pub metric: bool,
    pub imperial: bool,
}

impl Measurements {
    /// Run every check in order and produce a metric record.
    ///
    /// Order: units, presence, sex, lifestyle. The first failure wins.
    pub fn validate(&self) -> Result<BiometricInput, ValidationError> {
        let units = UnitSystem::from_flags(self.imperial, self.metric)?;

        let (Some(height), Some(weight), Some(age), Some(lifestyle), Some(sex)) = (
            positive(self.height),
            positive(self.weight),
            positive(self.age),
            positive(self.lifestyle),
            self.sex.as_deref().filter(|s| !s.is_empty()),
        ) else {
            return Err(ValidationError::MissingInformation);
        };

        let sex: Sex = sex.parse()?;
        let lifestyle = Lifestyle::from_multiplier(lifestyle)?;

        Ok(BiometricInput {
            units,
            height_cm: units.height_to_cm(height),
            weight_kg: units.weight_to_kg(weight),
            age,
            sex,
            lifestyle,
        })
    }
}

// NaN fails the comparison and is treated as missing.
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// A validated record. Height and weight are always metric here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiometricInput {
    /// The system the values were originally entered in
    pub units: UnitSystem,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: f64,
    pub sex: Sex,
    pub lifestyle: Lifestyle,
}

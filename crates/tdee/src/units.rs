//! Unit selection and imperial → metric conversion.

use serde::Serialize;

use crate::error::ValidationError;

pub const FEET_TO_CENTIMETRES: f64 = 30.48;
pub const POUNDS_TO_KILOGRAMS: f64 = 0.453592;

/// Which unit system the raw height and weight were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    /// Feet and pounds
    Imperial,
    /// Centimetres and kilograms
    Metric,
}

impl UnitSystem {
    /// Resolve the two unit flags. Imperial takes precedence if both are set.
    pub fn from_flags(imperial: bool, metric: bool) -> Result<Self, ValidationError> {
        match (imperial, metric) {
            (true, _) => Ok(UnitSystem::Imperial),
            (false, true) => Ok(UnitSystem::Metric),
            (false, false) => Err(ValidationError::NoUnitsSelected),
        }
    }

    /// Convert a height in this system to centimetres.
    pub fn height_to_cm(self, height: f64) -> f64 {
        match self {
            UnitSystem::Imperial => height * FEET_TO_CENTIMETRES,
            UnitSystem::Metric => height,
        }
    }

    /// Convert a weight in this system to kilograms.
    pub fn weight_to_kg(self, weight: f64) -> f64 {
        match self {
            UnitSystem::Imperial => weight * POUNDS_TO_KILOGRAMS,
            UnitSystem::Metric => weight,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Imperial => write!(f, "imperial (ft/lb)"),
            UnitSystem::Metric => write!(f, "metric (cm/kg)"),
        }
    }
}

//! The three BMR equations averaged into the TDEE estimate.
//!
//! All equations take weight in kilograms, height in centimetres and age in years,
//! and return kcal/day. They share one linear shape, so each is described by a pair
//! of coefficient sets (one per sex):
//!
//! `bmr = weight·w + height·h − age·a + constant`

use serde::Serialize;

use crate::biometrics::{BiometricInput, Sex};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Coefficients {
    weight: f64,
    height: f64,
    age: f64,
    constant: f64,
}

impl Coefficients {
    fn apply(&self, info: &BiometricInput) -> f64 {
        info.weight_kg * self.weight + info.height_cm * self.height - info.age * self.age
            + self.constant
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// Mifflin et al. (1990)
    MifflinStJeor,
    /// Harris & Benedict (1918)
    HarrisBenedictOriginal,
    /// Roza & Shizgal (1984)
    HarrisBenedictRevised,
}

impl Formula {
    pub const ALL: [Formula; 3] = [
        Formula::MifflinStJeor,
        Formula::HarrisBenedictOriginal,
        Formula::HarrisBenedictRevised,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Formula::MifflinStJeor => "Mifflin-St Jeor",
            Formula::HarrisBenedictOriginal => "Harris-Benedict (original)",
            Formula::HarrisBenedictRevised => "Harris-Benedict (revised)",
        }
    }

    fn coefficients(self, sex: Sex) -> Coefficients {
        match (self, sex) {
            (Formula::MifflinStJeor, Sex::Male) => Coefficients {
                weight: 10.0,
                height: 6.25,
                age: 5.0,
                constant: 5.0,
            },
            (Formula::MifflinStJeor, Sex::Female) => Coefficients {
                weight: 10.0,
                height: 6.25,
                age: 5.0,
                constant: -161.0,
            },
            (Formula::HarrisBenedictOriginal, Sex::Male) => Coefficients {
                weight: 13.7516,
                height: 5.0033,
                age: 6.7550,
                constant: 66.4730,
            },
            (Formula::HarrisBenedictOriginal, Sex::Female) => Coefficients {
                weight: 9.5643,
                height: 1.8496,
                age: 4.6756,
                constant: 655.0955,
            },
            (Formula::HarrisBenedictRevised, Sex::Male) => Coefficients {
                weight: 13.379,
                height: 4.799,
                age: 5.677,
                constant: 88.362,
            },
            (Formula::HarrisBenedictRevised, Sex::Female) => Coefficients {
                weight: 9.247,
                height: 3.098,
                age: 4.330,
                constant: 447.593,
            },
        }
    }

    /// Estimated basal metabolic rate in kcal/day.
    pub fn bmr(self, info: &BiometricInput) -> f64 {
        self.coefficients(info.sex).apply(info)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

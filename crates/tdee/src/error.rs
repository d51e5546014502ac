//! Validation failures surfaced to the user. Each one is terminal.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Imperial or metric units must be selected.")]
    NoUnitsSelected,

    #[error("Not all information has been provided.")]
    MissingInformation,

    #[error("Sex must be provided as male or female.")]
    InvalidSex,

    #[error("Invalid lifestyle modifier provided.")]
    InvalidLifestyleModifier,
}

//! Validation policy and rejection reasons.
//!
//! The bounds here are policy, not structure: they are named constants with
//! a configuration override, and the store never looks at them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound for mileage, in kilometres.
pub const DEFAULT_MAX_MILEAGE: u32 = 2_000_000;

/// Default earliest accepted year of manufacture.
pub const DEFAULT_MIN_YEAR: u16 = 1950;

/// Default latest accepted year of manufacture.
pub const DEFAULT_MAX_YEAR: u16 = 2025;

/// Length every VIN must have.
pub const VIN_LENGTH: usize = 17;

/// A vehicle field, as named in rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Manufacturer.
    Make,
    /// Model name.
    Model,
    /// Vehicle identification number.
    Vin,
    /// Registration plate.
    Plate,
    /// Odometer reading.
    Mileage,
    /// Year of manufacture.
    Year,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Make => write!(f, "make"),
            Self::Model => write!(f, "model"),
            Self::Vin => write!(f, "VIN"),
            Self::Plate => write!(f, "plate"),
            Self::Mileage => write!(f, "mileage"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// Why a raw field value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was blank.
    #[error("{field} cannot be empty")]
    Empty {
        /// The blank field.
        field: Field,
    },

    /// A value did not match the field's format.
    #[error("invalid {field} '{value}': expected {expected}")]
    InvalidFormat {
        /// The offending field.
        field: Field,
        /// The value as entered (trimmed).
        value: String,
        /// Description of the accepted format.
        expected: &'static str,
    },

    /// A number fell outside the policy bounds.
    #[error("{field} {value} is out of range ({min} to {max})")]
    OutOfRange {
        /// The offending field.
        field: Field,
        /// The value as entered.
        value: i64,
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
    },
}

impl ValidationError {
    /// The field this rejection concerns.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Empty { field }
            | Self::InvalidFormat { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }
}

/// Which characters a VIN may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VinAlphabet {
    /// `A-Z` and `0-9` without `I`, `O` and `Q`, as on real-world VINs.
    #[default]
    Strict,
    /// Any of `A-Z` and `0-9`.
    Relaxed,
}

/// Bounds and alphabet applied by the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Highest accepted mileage in kilometres.
    pub max_mileage: u32,
    /// Earliest accepted year of manufacture.
    pub min_year: u16,
    /// Latest accepted year of manufacture.
    pub max_year: u16,
    /// Accepted VIN characters.
    pub vin_alphabet: VinAlphabet,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_mileage: DEFAULT_MAX_MILEAGE,
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            vin_alphabet: VinAlphabet::Strict,
        }
    }
}

/// Trim `text` and reject it if nothing is left.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] for blank input.
pub fn validate_non_empty(field: Field, text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Parse a whole number typed by the user.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] for blank input and
/// [`ValidationError::InvalidFormat`] when the text is not an integer.
pub fn parse_number(field: Field, text: &str) -> Result<i64, ValidationError> {
    let trimmed = validate_non_empty(field, text)?;
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field,
            value: trimmed,
            expected: "a whole number",
        })
}

//! Field validation for vehicle input.
//!
//! Every front end funnels raw user input through a [`Validator`] before it
//! builds a [`VehicleRecord`]. The validators are pure: they look only at the
//! value and the configured [`Policy`], never at the store.
//!
//! # Example
//!
//! ```
//! use vehiclereg::record::PlateFormat;
//! use vehiclereg::validation::Validator;
//!
//! let validator = Validator::default();
//!
//! assert_eq!(validator.validate_vin("a1b2c3d4e5f6g7h8j").unwrap(), "A1B2C3D4E5F6G7H8J");
//! assert!(validator.validate_plate("ABC123GP", PlateFormat::Old).is_ok());
//! assert!(validator.validate_year(1949).is_err());
//! ```

mod patterns;
mod rules;

use tracing::trace;

pub use patterns::{plate_pattern, vin_pattern, FieldPattern};
pub use rules::{
    parse_number, validate_non_empty, Field, Policy, ValidationError, VinAlphabet,
    DEFAULT_MAX_MILEAGE, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, VIN_LENGTH,
};

use crate::record::{PlateFormat, VehicleRecord};

/// Raw, untrusted field values as collected by a front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawVehicle {
    /// Manufacturer as typed.
    pub make: String,
    /// Model as typed.
    pub model: String,
    /// VIN as typed, any case.
    pub vin: String,
    /// Plate as typed, any case.
    pub plate: String,
    /// The plate format the user chose, or `None` to detect it.
    pub plate_format: Option<PlateFormat>,
    /// Mileage as typed.
    pub mileage: String,
    /// Year as typed.
    pub year: String,
}

/// Applies a [`Policy`] to raw field values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    policy: Policy,
}

impl Validator {
    /// Create a validator enforcing the given policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// The policy in force.
    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Validate a VIN, returning it trimmed and uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for blank input and
    /// [`ValidationError::InvalidFormat`] for the wrong length or alphabet.
    pub fn validate_vin(&self, text: &str) -> Result<String, ValidationError> {
        let vin = validate_non_empty(Field::Vin, text)?.to_ascii_uppercase();
        let pattern = vin_pattern(self.policy.vin_alphabet);

        if vin.chars().count() != VIN_LENGTH || !pattern.matches(&vin) {
            trace!(pattern = %pattern.name, "VIN rejected");
            return Err(ValidationError::InvalidFormat {
                field: Field::Vin,
                value: vin,
                expected: pattern.description,
            });
        }
        Ok(vin)
    }

    /// Validate a plate against one format, returning it trimmed and uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for blank input and
    /// [`ValidationError::InvalidFormat`] when the plate does not follow `format`.
    pub fn validate_plate(
        &self,
        text: &str,
        format: PlateFormat,
    ) -> Result<String, ValidationError> {
        let plate = validate_non_empty(Field::Plate, text)?.to_ascii_uppercase();
        let pattern = plate_pattern(format);

        if !pattern.matches(&plate) {
            trace!(pattern = %pattern.name, "plate rejected");
            return Err(ValidationError::InvalidFormat {
                field: Field::Plate,
                value: plate,
                expected: pattern.description,
            });
        }
        Ok(plate)
    }

    /// Validate a plate in whichever supported format it follows.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for blank input and
    /// [`ValidationError::InvalidFormat`] when no format matches.
    pub fn validate_any_plate(&self, text: &str) -> Result<String, ValidationError> {
        let plate = validate_non_empty(Field::Plate, text)?;
        match PlateFormat::detect(&plate) {
            Some(format) => self.validate_plate(&plate, format),
            None => Err(ValidationError::InvalidFormat {
                field: Field::Plate,
                value: plate.to_ascii_uppercase(),
                expected: "an old (ABC123GP) or new (AB12CDGP) format plate",
            }),
        }
    }

    /// Check a mileage reading against `0..=max_mileage`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside the bounds.
    pub fn validate_mileage(&self, mileage: i64) -> Result<u32, ValidationError> {
        let max = self.policy.max_mileage;
        u32::try_from(mileage)
            .ok()
            .filter(|m| *m <= max)
            .ok_or(ValidationError::OutOfRange {
                field: Field::Mileage,
                value: mileage,
                min: 0,
                max: i64::from(max),
            })
    }

    /// Check a year of manufacture against `min_year..=max_year`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside the bounds.
    pub fn validate_year(&self, year: i64) -> Result<u16, ValidationError> {
        let (min, max) = (self.policy.min_year, self.policy.max_year);
        u16::try_from(year)
            .ok()
            .filter(|y| (min..=max).contains(y))
            .ok_or(ValidationError::OutOfRange {
                field: Field::Year,
                value: year,
                min: i64::from(min),
                max: i64::from(max),
            })
    }

    /// Validate every field of `raw` and build a record.
    ///
    /// Fields are checked in the order make, model, VIN, plate, mileage,
    /// year; the first rejection is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate_record(&self, raw: &RawVehicle) -> Result<VehicleRecord, ValidationError> {
        let make = validate_non_empty(Field::Make, &raw.make)?;
        let model = validate_non_empty(Field::Model, &raw.model)?;
        let vin = self.validate_vin(&raw.vin)?;
        let plate = match raw.plate_format {
            Some(format) => self.validate_plate(&raw.plate, format)?,
            None => self.validate_any_plate(&raw.plate)?,
        };
        let mileage = self.validate_mileage(parse_number(Field::Mileage, &raw.mileage)?)?;
        let year = self.validate_year(parse_number(Field::Year, &raw.year)?)?;

        Ok(VehicleRecord::new(make, model, vin, plate, mileage, year))
    }
}

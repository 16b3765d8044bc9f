//! Core record types for vehiclereg.
//!
//! This module defines the vehicle record held by the store and the plate
//! formats a registration plate may follow.

use serde::{Deserialize, Serialize};

/// The registration plate layout a plate number follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateFormat {
    /// Three letters, three digits, then `GP` (e.g. `ABC123GP`).
    Old,
    /// Two letters, two digits, two letters, then `GP` (e.g. `AB12CDGP`).
    New,
}

impl PlateFormat {
    /// All supported formats, in the order they are offered to users.
    pub const ALL: [Self; 2] = [Self::Old, Self::New];

    /// A sample plate in this format, used in prompts and error messages.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::Old => "ABC123GP",
            Self::New => "AB12CDGP",
        }
    }

    /// Work out which format a plate follows, if any.
    ///
    /// The input is trimmed and compared case-insensitively.
    #[must_use]
    pub fn detect(plate: &str) -> Option<Self> {
        let plate = plate.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|format| crate::validation::plate_pattern(*format).matches(&plate))
    }
}

impl std::fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}

/// A registered vehicle.
///
/// A plain value holder. Field values are expected to have passed the
/// [`Validator`](crate::validation::Validator) before the record is built;
/// nothing is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    make: String,
    model: String,
    vin: String,
    plate: String,
    mileage: u32,
    year: u16,
}

impl VehicleRecord {
    /// Create a record from already-validated field values.
    #[must_use]
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        vin: impl Into<String>,
        plate: impl Into<String>,
        mileage: u32,
        year: u16,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            vin: vin.into(),
            plate: plate.into(),
            mileage,
            year,
        }
    }

    /// Manufacturer, e.g. `Toyota`.
    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Model name, e.g. `Corolla`.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The 17-character vehicle identification number.
    #[must_use]
    pub fn vin(&self) -> &str {
        &self.vin
    }

    /// The registration plate.
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Odometer reading in kilometres.
    #[must_use]
    pub fn mileage(&self) -> u32 {
        self.mileage
    }

    /// Year of manufacture.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Check whether `key` names this record's VIN or plate, ignoring case.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        self.vin.eq_ignore_ascii_case(key) || self.plate.eq_ignore_ascii_case(key)
    }
}

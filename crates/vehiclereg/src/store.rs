//! In-memory vehicle store.
//!
//! The store is the single source of truth for registered vehicles. It keeps
//! records in insertion order and guarantees that no two records share a VIN
//! or a plate, compared without regard to ASCII case.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, KeyField, Result};
use crate::record::VehicleRecord;

/// Storage for registered vehicles.
///
/// Provides:
/// - Insertion with VIN and plate uniqueness checks
/// - Lookup by VIN or plate
/// - Deletion by VIN
/// - Read-only listing and aggregate statistics
///
/// All operations are linear scans; the store is meant for one interactive
/// session's worth of vehicles.
#[derive(Debug, Clone, Default)]
pub struct VehicleStore {
    vehicles: Vec<VehicleRecord>,
}

impl VehicleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle.
    ///
    /// The record is appended after every existing record. Nothing changes
    /// if the record is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if any registered vehicle has the same
    /// VIN or plate, ignoring case. A clash on the VIN is reported in
    /// preference to a clash on the plate.
    pub fn add(&mut self, record: VehicleRecord) -> Result<()> {
        if let Some(existing) = self
            .vehicles
            .iter()
            .find(|v| v.vin().eq_ignore_ascii_case(record.vin()))
        {
            debug!(vin = %record.vin(), "Rejecting duplicate VIN");
            return Err(Error::duplicate_key(KeyField::Vin, existing.vin()));
        }

        if let Some(existing) = self
            .vehicles
            .iter()
            .find(|v| v.plate().eq_ignore_ascii_case(record.plate()))
        {
            debug!(plate = %record.plate(), "Rejecting duplicate plate");
            return Err(Error::duplicate_key(KeyField::Plate, existing.plate()));
        }

        debug!(vin = %record.vin(), plate = %record.plate(), "Registered vehicle");
        self.vehicles.push(record);
        Ok(())
    }

    /// Find a vehicle by VIN or plate.
    ///
    /// Surrounding whitespace in `query` is ignored and the comparison is
    /// case-insensitive. The earliest registered match is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no vehicle matches.
    pub fn find_by_key(&self, query: &str) -> Result<&VehicleRecord> {
        let key = query.trim();
        self.vehicles
            .iter()
            .find(|v| v.matches_key(key))
            .ok_or_else(|| Error::not_found(key))
    }

    /// Check whether any vehicle has `query` as its VIN or plate.
    #[must_use]
    pub fn contains_key(&self, query: &str) -> bool {
        self.find_by_key(query).is_ok()
    }

    /// Remove the vehicle with the given VIN and return it.
    ///
    /// Only VINs are matched; a plate number never deletes anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no vehicle has this VIN.
    pub fn delete_by_vin(&mut self, vin: &str) -> Result<VehicleRecord> {
        let vin = vin.trim();
        let index = self
            .vehicles
            .iter()
            .position(|v| v.vin().eq_ignore_ascii_case(vin))
            .ok_or_else(|| Error::not_found(vin))?;

        let removed = self.vehicles.remove(index);
        debug!(vin = %removed.vin(), "Deleted vehicle");
        Ok(removed)
    }

    /// All registered vehicles, in the order they were added.
    #[must_use]
    pub fn list_all(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    /// Number of registered vehicles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Check if no vehicles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Compute summary statistics in a single pass.
    #[must_use]
    pub fn aggregate_stats(&self) -> StoreStats {
        let mut total_mileage: u64 = 0;
        let mut years: Option<(u16, u16)> = None;

        for vehicle in &self.vehicles {
            total_mileage += u64::from(vehicle.mileage());
            let year = vehicle.year();
            years = Some(match years {
                Some((min, max)) => (min.min(year), max.max(year)),
                None => (year, year),
            });
        }

        let count = self.vehicles.len();
        #[allow(clippy::cast_precision_loss)]
        let average_mileage = (count > 0).then(|| total_mileage as f64 / count as f64);

        StoreStats {
            count,
            total_mileage,
            average_mileage,
            min_year: years.map(|(min, _)| min),
            max_year: years.map(|(_, max)| max),
        }
    }
}

/// Summary statistics over every registered vehicle.
///
/// The mileage average and the year bounds are `None` for an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoreStats {
    /// Number of registered vehicles.
    pub count: usize,
    /// Combined mileage in kilometres.
    pub total_mileage: u64,
    /// Mean mileage in kilometres.
    pub average_mileage: Option<f64>,
    /// Year of the oldest vehicle.
    pub min_year: Option<u16>,
    /// Year of the newest vehicle.
    pub max_year: Option<u16>,
}

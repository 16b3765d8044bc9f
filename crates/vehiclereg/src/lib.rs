//! `vehiclereg` - An in-memory vehicle registration manager
//!
//! This library provides the vehicle record type, a store that keeps VINs and
//! plates unique, the field validators every front end shares, and the
//! interactive console session built on top of them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod session;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::{Error, KeyField, Result};
pub use logging::init_logging;
pub use record::{PlateFormat, VehicleRecord};
pub use session::Session;
pub use store::{StoreStats, VehicleStore};
pub use validation::{Policy, RawVehicle, ValidationError, Validator};

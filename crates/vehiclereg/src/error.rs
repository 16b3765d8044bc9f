//! Error types for vehiclereg.
//!
//! This module defines the crate-wide error type. Every variant except
//! [`Error::Io`] is recoverable: front ends report it and re-prompt.

use thiserror::Error;

use crate::validation::ValidationError;

/// The unique key a duplicate registration collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    /// Vehicle identification number.
    Vin,
    /// Registration plate.
    Plate,
}

impl std::fmt::Display for KeyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vin => write!(f, "VIN"),
            Self::Plate => write!(f, "plate"),
        }
    }
}

/// The main error type for vehiclereg operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // === Store Errors ===
    /// A vehicle with the same VIN or plate is already registered.
    #[error("a vehicle with {field} {value} is already registered")]
    DuplicateKey {
        /// Which key collided.
        field: KeyField,
        /// The colliding value, as held by the existing record.
        value: String,
    },

    /// No vehicle matches the given VIN or plate.
    #[error("no vehicle found for '{key}'")]
    NotFound {
        /// The key that was looked up.
        key: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// A configuration file that was asked for does not exist.
    #[error("no configuration file at {}", path.display())]
    ConfigMissing {
        /// The path that was checked.
        path: std::path::PathBuf,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for vehiclereg operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given key.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a duplicate key error.
    #[must_use]
    pub fn duplicate_key(field: KeyField, value: impl Into<String>) -> Self {
        Self::DuplicateKey {
            field,
            value: value.into(),
        }
    }

    /// Check if this error means no vehicle matched.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a VIN or plate collision.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Check if this error is a rejected field value.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::record::PlateFormat;

/// Interactive session arguments.
#[derive(Debug, Default, Args)]
pub struct SessionCommand {
    /// Don't print the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Save new vehicles without asking for confirmation
    #[arg(long)]
    pub no_confirm: bool,
}

/// Single-field validation commands.
#[derive(Debug, Subcommand)]
pub enum CheckCommand {
    /// Check a vehicle identification number
    Vin {
        /// The VIN to check
        value: String,
    },

    /// Check a registration plate
    Plate {
        /// The plate to check
        value: String,

        /// Required plate format (detected when omitted)
        #[arg(short, long, value_enum)]
        format: Option<PlateFormatArg>,
    },

    /// Check a mileage reading in kilometres
    Mileage {
        /// The mileage to check
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Check a year of manufacture
    Year {
        /// The year to check
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Plate format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlateFormatArg {
    /// Old format, e.g. ABC123GP
    Old,
    /// New format, e.g. AB12CDGP
    New,
}

impl From<PlateFormatArg> for PlateFormat {
    fn from(arg: PlateFormatArg) -> Self {
        match arg {
            PlateFormatArg::Old => Self::Old,
            PlateFormatArg::New => Self::New,
        }
    }
}

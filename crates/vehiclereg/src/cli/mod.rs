//! Command-line interface for vehiclereg.
//!
//! This module provides the CLI structure for the `vehiclereg` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CheckCommand, ConfigCommand, PlateFormatArg, SessionCommand};

/// vehiclereg - Register and manage vehicles in memory
///
/// Runs an interactive menu for registering, searching, listing and
/// deleting vehicles. Records last for the session only.
#[derive(Debug, Parser)]
#[command(name = "vehiclereg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to an interactive session)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive registration session
    Session(SessionCommand),

    /// Validate a single field value
    #[command(subcommand)]
    Check(CheckCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "vehiclereg");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
        assert_eq!(cli(3, true).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["vehiclereg"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_session() {
        let cli = Cli::try_parse_from(["vehiclereg", "session", "--no-banner"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Session(SessionCommand {
                no_banner: true,
                no_confirm: false
            }))
        ));
    }

    #[test]
    fn test_parse_session_no_confirm() {
        let cli = Cli::try_parse_from(["vehiclereg", "session", "--no-confirm"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Session(SessionCommand {
                no_banner: false,
                no_confirm: true
            }))
        ));
    }

    #[test]
    fn test_parse_check_vin() {
        let cli = Cli::try_parse_from(["vehiclereg", "check", "vin", "A1B2C3D4E5F6G7H8J"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Check(CheckCommand::Vin { ref value })) if value == "A1B2C3D4E5F6G7H8J"
        ));
    }

    #[test]
    fn test_parse_check_plate_with_format() {
        let cli =
            Cli::try_parse_from(["vehiclereg", "check", "plate", "AB12CDGP", "-f", "new"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Check(CheckCommand::Plate {
                format: Some(PlateFormatArg::New),
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_check_negative_mileage() {
        let cli = Cli::try_parse_from(["vehiclereg", "check", "mileage", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Check(CheckCommand::Mileage { ref value })) if value == "-5"
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let args = ["vehiclereg", "-c", "/custom/config.toml", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Show { json: false }))
        ));
    }

    #[test]
    fn test_parse_with_verbose() {
        let cli = Cli::try_parse_from(["vehiclereg", "-vv", "session"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}

//! `vehiclereg` - CLI for the vehicle registration manager
//!
//! Without a subcommand this starts the interactive session.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use vehiclereg::cli::{CheckCommand, Cli, Command, ConfigCommand, SessionCommand};
use vehiclereg::validation::{parse_number, Field};
use vehiclereg::{init_logging, Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config_path = cli.config;
    match cli
        .command
        .unwrap_or_else(|| Command::Session(SessionCommand::default()))
    {
        Command::Session(session_cmd) => handle_session(load_config(config_path)?, &session_cmd),
        Command::Check(check_cmd) => handle_check(&load_config(config_path)?, check_cmd),
        // Config commands must run even when the configured file is invalid
        Command::Config(config_cmd) => handle_config(config_path, config_cmd),
    }
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(config_path).context("could not load configuration")
}

fn handle_session(config: Config, cmd: &SessionCommand) -> anyhow::Result<()> {
    let validator = config.validator();
    let mut settings = config.session;
    if cmd.no_banner {
        settings.show_banner = false;
    }
    if cmd.no_confirm {
        settings.confirm_before_save = false;
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), validator, settings);
    session.run().context("interactive session failed")?;
    Ok(())
}

fn handle_check(config: &Config, cmd: CheckCommand) -> anyhow::Result<()> {
    let validator = config.validator();

    let normalized = match cmd {
        CheckCommand::Vin { value } => validator.validate_vin(&value),
        CheckCommand::Plate { value, format } => match format {
            Some(format) => validator.validate_plate(&value, format.into()),
            None => validator.validate_any_plate(&value),
        },
        CheckCommand::Mileage { value } => parse_number(Field::Mileage, &value)
            .and_then(|n| validator.validate_mileage(n))
            .map(|n| n.to_string()),
        CheckCommand::Year { value } => parse_number(Field::Year, &value)
            .and_then(|n| validator.validate_year(n))
            .map(|n| n.to_string()),
    }?;

    println!("{normalized}");
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Policy]");
                println!("  Max mileage (km):   {}", config.policy.max_mileage);
                println!("  Min year:           {}", config.policy.min_year);
                println!("  Max year:           {}", config.policy.max_year);
                println!("  VIN alphabet:       {:?}", config.policy.vin_alphabet);
                println!();
                println!("[Session]");
                println!(
                    "  Confirm before save: {}",
                    config.session.confirm_before_save
                );
                println!("  Show banner:        {}", config.session.show_banner);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::resolve_path(config_path).display());
        }
        ConfigCommand::Validate { file } => {
            let path = Config::resolve_path(file.or(config_path));
            println!("Validating configuration: {}", path.display());
            Config::check_file(&path)
                .with_context(|| format!("configuration {} is invalid", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

//! Log output for the registry.
//!
//! Everything is written to stderr. Stdout carries the menu and the results
//! of `check`, which scripts capture.

use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// How much the binary logs, chosen with `-q` and `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Session start and end, configuration problems.
    #[default]
    Normal,
    /// Every store mutation.
    Verbose,
    /// Every rejected field value as well.
    Trace,
}

impl Verbosity {
    /// The most detailed level that is emitted.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset, e.g. `vehiclereg=info`.
    #[must_use]
    pub fn directive(self) -> String {
        format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            self.level().as_str().to_ascii_lowercase()
        )
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbosity` when it parses. Calling this again is a
/// no-op.
///
/// ```no_run
/// use vehiclereg::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

/// Route warnings into the test harness's captured output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

//! Log output for the command-line tool.

use std::io::{self, IsTerminal as _};

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors encountered while configuring logging.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to install the tracing subscriber.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Installs the global subscriber, writing to stderr.
///
/// The filter is read from `RUST_LOG` and falls back to
/// [`DEFAULT_LOG_FILTER`], so a normal run prints nothing but the console
/// dialogue.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[inline]
pub fn initialise() -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        // Keep colour off when stderr is redirected.
        .with_ansi(io::stderr().is_terminal())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

//! Structured telemetry initialisation.
//!
//! The configured filter is used as given, with one addition: while the
//! timestamp check is disabled, warnings on the dispatch target stay enabled
//! so every turn admitted without replay protection is reported.

use std::borrow::Cow;
use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use parley_config::{Config, LogFormat};

use crate::dispatcher::DISPATCH_TARGET;

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the global tracing subscriber on first use.
///
/// Later calls return a fresh [`TelemetryHandle`] without touching global
/// state, so the configuration of the first call wins.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter and
/// [`TelemetryError::Subscriber`] when another subscriber is already
/// installed globally.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|()| TelemetryHandle)
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(filter_directives(config).as_ref())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let builder = |filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(io::stderr)
            // Colour only on interactive terminals.
            .with_ansi(io::stderr().is_terminal())
            .with_timer(fmt::time::UtcTime::rfc_3339())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

/// Filter directives for the subscriber.
///
/// Appends `parley::dispatch=warn` when the timestamp check is skipped and
/// the configured filter does not already mention the dispatch target.
fn filter_directives(config: &Config) -> Cow<'_, str> {
    let configured = config.log_filter();
    if !config.skip_timestamp_check || configured.contains(DISPATCH_TARGET) {
        return Cow::Borrowed(configured);
    }
    let dispatch_warnings = format!("{DISPATCH_TARGET}=warn");
    if configured.trim().is_empty() {
        Cow::Owned(dispatch_warnings)
    } else {
        Cow::Owned(format!("{configured},{dispatch_warnings}"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn config(log_filter: &str, skip_timestamp_check: bool) -> Config {
        Config {
            log_filter: log_filter.to_owned(),
            skip_timestamp_check,
            ..Config::default()
        }
    }

    #[rstest]
    #[case::checked("error", false, "error")]
    #[case::skipped("error", true, "error,parley::dispatch=warn")]
    #[case::skipped_empty("", true, "parley::dispatch=warn")]
    #[case::already_named("off,parley::dispatch=debug", true, "off,parley::dispatch=debug")]
    fn dispatch_warnings_survive_a_skipped_timestamp_check(
        #[case] log_filter: &str,
        #[case] skip: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(filter_directives(&config(log_filter, skip)), expected);
    }

    #[test]
    fn widened_filter_parses() {
        let widened = config("info", true);
        let directives = filter_directives(&widened);
        assert!(EnvFilter::try_new(directives.as_ref()).is_ok());
    }

    #[test]
    fn initialise_is_idempotent() {
        let config = Config::default();
        let first = initialise(&config);
        let second = initialise(&config);
        // Another test binary component may already own the global
        // subscriber; a repeated call must still agree with the first.
        assert_eq!(first.is_ok(), second.is_ok());
    }
}

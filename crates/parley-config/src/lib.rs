//! Shared configuration for the parley request pipeline.
//!
//! Configuration is layered by [`ortho_config`]: built-in defaults, then a
//! configuration file, then `PARLEY_*` environment variables, then command
//! line flags. The resulting [`Config`] carries the admission-check settings
//! consumed by the dispatcher and the logging settings consumed by telemetry.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_TIMESTAMP_TOLERANCE_SECS, default_log_filter,
    default_log_filter_string, default_log_format, default_timestamp_tolerance_secs,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for a skill endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "PARLEY")]
pub struct Config {
    /// Application identifier the platform must present in each request.
    #[serde(default)]
    pub application_id: String,
    /// Disables the application identity admission check.
    #[serde(default)]
    pub skip_application_id_check: bool,
    /// Disables the timestamp freshness admission check.
    ///
    /// Turning this off removes replay protection.
    #[serde(default)]
    pub skip_timestamp_check: bool,
    /// Maximum drift, in seconds, between a request timestamp and "now".
    #[serde(default = "default_timestamp_tolerance_secs")]
    pub timestamp_tolerance_secs: u32,
    /// Filter expression handed to the tracing subscriber.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Output format for log records.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            skip_application_id_check: false,
            skip_timestamp_check: false,
            timestamp_tolerance_secs: DEFAULT_TIMESTAMP_TOLERANCE_SECS,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Expected application identifier.
    #[must_use]
    pub fn application_id(&self) -> &str {
        self.application_id.as_str()
    }

    /// Tolerance applied by the timestamp check.
    #[must_use]
    pub const fn timestamp_tolerance_secs(&self) -> u32 {
        self.timestamp_tolerance_secs
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

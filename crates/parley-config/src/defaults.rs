use crate::logging::LogFormat;

/// Seconds a request timestamp may drift from the local clock.
pub const DEFAULT_TIMESTAMP_TOLERANCE_SECS: u32 = 150;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format.
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default timestamp tolerance, exposed as a function for serde.
pub fn default_timestamp_tolerance_secs() -> u32 {
    DEFAULT_TIMESTAMP_TOLERANCE_SECS
}

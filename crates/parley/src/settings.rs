//! Admission settings owned by a dispatcher.

use parley_config::{Config, DEFAULT_TIMESTAMP_TOLERANCE_SECS};

/// Which admission checks run, and with what parameters.
///
/// A dispatcher owns its settings, so concurrent turns on one dispatcher
/// always observe the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    application_id: String,
    skip_application_id_check: bool,
    skip_timestamp_check: bool,
    timestamp_tolerance_secs: u32,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            skip_application_id_check: false,
            skip_timestamp_check: false,
            timestamp_tolerance_secs: DEFAULT_TIMESTAMP_TOLERANCE_SECS,
        }
    }
}

impl DispatchSettings {
    /// Settings expecting `application_id`, with both checks enabled.
    #[must_use]
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            ..Self::default()
        }
    }

    /// Maps the loaded configuration onto dispatch settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            application_id: config.application_id().to_owned(),
            skip_application_id_check: config.skip_application_id_check,
            skip_timestamp_check: config.skip_timestamp_check,
            timestamp_tolerance_secs: config.timestamp_tolerance_secs(),
        }
    }

    /// Expected application identifier.
    #[must_use]
    pub fn application_id(&self) -> &str {
        self.application_id.as_str()
    }

    /// Replaces the expected application identifier.
    pub fn set_application_id(&mut self, application_id: impl Into<String>) {
        self.application_id = application_id.into();
    }

    /// `true` when the identity check runs.
    #[must_use]
    pub const fn verifies_application_id(&self) -> bool {
        !self.skip_application_id_check
    }

    /// Enables or disables skipping the identity check.
    pub const fn set_skip_application_id_check(&mut self, skip: bool) {
        self.skip_application_id_check = skip;
    }

    /// `true` when the timestamp check runs.
    #[must_use]
    pub const fn verifies_timestamp(&self) -> bool {
        !self.skip_timestamp_check
    }

    /// Enables or disables skipping the timestamp check.
    pub const fn set_skip_timestamp_check(&mut self, skip: bool) {
        self.skip_timestamp_check = skip;
    }

    /// Tolerance applied by the timestamp check.
    #[must_use]
    pub const fn timestamp_tolerance_secs(&self) -> u32 {
        self.timestamp_tolerance_secs
    }

    /// Sets the tolerance applied by the timestamp check.
    pub const fn set_timestamp_tolerance_secs(&mut self, seconds: u32) {
        self.timestamp_tolerance_secs = seconds;
    }

    /// Builder form of [`Self::set_skip_application_id_check`].
    #[must_use]
    pub const fn skipping_application_id_check(mut self, skip: bool) -> Self {
        self.skip_application_id_check = skip;
        self
    }

    /// Builder form of [`Self::set_skip_timestamp_check`].
    #[must_use]
    pub const fn skipping_timestamp_check(mut self, skip: bool) -> Self {
        self.skip_timestamp_check = skip;
        self
    }

    /// Builder form of [`Self::set_timestamp_tolerance_secs`].
    #[must_use]
    pub const fn with_timestamp_tolerance_secs(mut self, seconds: u32) -> Self {
        self.timestamp_tolerance_secs = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_checks() {
        let settings = DispatchSettings::new("amzn1.ask.skill.1");
        assert!(settings.verifies_application_id());
        assert!(settings.verifies_timestamp());
        assert_eq!(settings.timestamp_tolerance_secs(), 150);
    }

    #[test]
    fn maps_configuration() {
        let config = Config {
            application_id: String::from("amzn1.ask.skill.cfg"),
            skip_timestamp_check: true,
            timestamp_tolerance_secs: 60,
            ..Config::default()
        };
        let settings = DispatchSettings::from_config(&config);

        assert_eq!(settings.application_id(), "amzn1.ask.skill.cfg");
        assert!(settings.verifies_application_id());
        assert!(!settings.verifies_timestamp());
        assert_eq!(settings.timestamp_tolerance_secs(), 60);
    }
}

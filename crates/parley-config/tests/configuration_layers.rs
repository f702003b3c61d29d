//! Precedence tests for the layered configuration loader.

use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use ortho_config::OrthoConfig;
use parley_config::Config;

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct EnvOverride {
    key: &'static str,
    previous: Option<OsString>,
    guard: Option<MutexGuard<'static, ()>>,
}

impl EnvOverride {
    fn set_var(key: &'static str, value: &OsStr) -> Self {
        let guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        let previous = std::env::var_os(key);
        // Environment mutation is unsafe in edition 2024; the override is
        // serialised through ENV_MUTEX and undone in Drop.
        unsafe { std::env::set_var(key, value) };
        Self {
            key,
            previous,
            guard: Some(guard),
        }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe { std::env::set_var(self.key, value) },
            None => unsafe { std::env::remove_var(self.key) },
        }
        drop(self.guard.take());
    }
}

fn args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[test]
fn cli_flags_override_defaults() {
    let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
    let config = Config::load_from_iter(args(&[
        "parley",
        "--application-id",
        "amzn1.ask.skill.cli",
        "--log-filter",
        "debug",
    ]))
    .expect("load configuration");

    assert_eq!(config.application_id(), "amzn1.ask.skill.cli");
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.timestamp_tolerance_secs(), 150);
}

#[test]
fn environment_supplies_application_id() {
    let _env = EnvOverride::set_var("PARLEY_APPLICATION_ID", OsStr::new("amzn1.ask.skill.env"));
    let config = Config::load_from_iter(args(&["parley"])).expect("load configuration");

    assert_eq!(config.application_id(), "amzn1.ask.skill.env");
}

#[test]
fn cli_flags_take_precedence_over_environment() {
    let _env = EnvOverride::set_var("PARLEY_APPLICATION_ID", OsStr::new("amzn1.ask.skill.env"));
    let config = Config::load_from_iter(args(&[
        "parley",
        "--application-id",
        "amzn1.ask.skill.cli",
    ]))
    .expect("load configuration");

    assert_eq!(config.application_id(), "amzn1.ask.skill.cli");
}

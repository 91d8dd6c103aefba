//! Environment overrides for property-test runs.
//!
//! Property suites across the workspace read their case count, fork mode and
//! repetition knobs through this module so CI and local runs share one
//! interpretation of the variables.

use std::env;
use std::num::NonZeroU32;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const IPMST_PBT_FORK_ENV_KEY: &str = "IPMST_PBT_FORK";

/// Reasons an override value was ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The value was not a positive integer.
    #[error("expected a positive integer, got `{0}`")]
    NotPositive(String),
    /// The value was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{0}`")]
    NotBoolean(String),
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: NonZeroU32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from `PROGTEST_CASES` and `IPMST_PBT_FORK`, using
    /// the given defaults when a variable is unset or invalid.
    ///
    /// A `default_cases` of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipmst_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let fallback = NonZeroU32::new(default_cases).unwrap_or(NonZeroU32::MIN);
        Self {
            cases: env_override(PROGTEST_CASES_ENV_KEY, fallback, parse_positive),
            fork: env_override(IPMST_PBT_FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases.get()
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

/// Reads a positive count from `key`, falling back to `default`.
///
/// Used for suite-specific knobs such as repetition counts.
#[must_use]
pub fn positive_count(key: &'static str, default: usize) -> usize {
    let parsed = env_override(key, default, |raw| {
        parse_positive(raw).map(|value| value.get() as usize)
    });
    parsed.max(1)
}

/// Reads `key` and parses it, logging and falling back to `default` when
/// the variable is unset or the value is rejected.
pub fn env_override<T, F>(key: &'static str, default: T, parse: F) -> T
where
    F: Fn(&str) -> Result<T, OverrideError>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            error = %error,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<NonZeroU32, OverrideError> {
    raw.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| OverrideError::NotPositive(raw.to_owned()))
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotBoolean(raw.to_owned())),
    }
}

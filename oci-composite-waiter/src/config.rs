//! Waiter tuning: named defaults, per-call overrides and environment overrides.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest pause between two polls unless overridden.
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);
/// Total wait budget unless overridden.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(1200);
/// Pause before the second poll; later pauses double up to the max interval.
pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_secs(1);
/// Shortest pause between two polls, whatever the configuration says.
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);
/// Fraction of each pause that is randomized.
pub const DEFAULT_JITTER: f64 = 0.1;

pub const ENV_MAX_INTERVAL_SECONDS: &str = "OCI_WAITER_MAX_INTERVAL_SECONDS";
pub const ENV_MAX_WAIT_SECONDS: &str = "OCI_WAITER_MAX_WAIT_SECONDS";
pub const ENV_BASE_INTERVAL_SECONDS: &str = "OCI_WAITER_BASE_INTERVAL_SECONDS";
pub const ENV_JITTER: &str = "OCI_WAITER_JITTER";

/// Timing parameters of a wait.
///
/// Durations (de)serialize as fractional seconds:
///
/// ```
/// use oci_composite_waiter::WaiterConfig;
/// use std::time::Duration;
///
/// let config = WaiterConfig::default()
///     .with_max_interval(Duration::from_secs(10))
///     .with_max_wait(Duration::from_secs(300));
/// assert_eq!(config.max_wait, Duration::from_secs(300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaiterConfig {
    #[serde(rename = "baseIntervalSeconds", with = "seconds")]
    pub base_interval: Duration,
    #[serde(rename = "maxIntervalSeconds", with = "seconds")]
    pub max_interval: Duration,
    #[serde(rename = "maxWaitSeconds", with = "seconds")]
    pub max_wait: Duration,
    pub jitter: f64,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            base_interval: DEFAULT_BASE_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl WaiterConfig {
    /// Defaults, overridden by any `OCI_WAITER_*` environment variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(interval) = read_seconds(ENV_MAX_INTERVAL_SECONDS)? {
            config.max_interval = interval;
        }
        if let Some(wait) = read_seconds(ENV_MAX_WAIT_SECONDS)? {
            config.max_wait = wait;
        }
        if let Some(base) = read_seconds(ENV_BASE_INTERVAL_SECONDS)? {
            config.base_interval = base;
        }
        if let Some(raw) = read_var(ENV_JITTER)? {
            let jitter = raw.trim().parse::<f64>().map_err(|e| invalid(ENV_JITTER, &raw, e))?;
            if !(0.0..=1.0).contains(&jitter) {
                return Err(invalid(ENV_JITTER, &raw, "must be between 0 and 1"));
            }
            config.jitter = jitter;
        }
        log::debug!("Loaded waiter configuration: {config:?}");
        Ok(config)
    }

    /// Raised to [`MIN_INTERVAL`] if shorter.
    pub fn with_base_interval(mut self, base_interval: Duration) -> Self {
        self.base_interval = base_interval.max(MIN_INTERVAL);
        self
    }

    /// Raised to [`MIN_INTERVAL`] if shorter.
    pub fn with_max_interval(mut self, max_interval: Duration) -> Self {
        self.max_interval = max_interval.max(MIN_INTERVAL);
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Clamped to `0.0..=1.0`.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Apply the per-call overrides on top of this configuration.
    pub fn with_overrides(mut self, options: &WaiterOptions) -> Self {
        if let Some(max_interval) = options.max_interval {
            self.max_interval = max_interval;
        }
        if let Some(max_wait) = options.max_wait {
            self.max_wait = max_wait;
        }
        self
    }
}

/// Per-call overrides of the polling interval ceiling and the total wait budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaiterOptions {
    pub max_interval: Option<Duration>,
    pub max_wait: Option<Duration>,
}

impl WaiterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_interval_seconds(mut self, seconds: u64) -> Self {
        self.max_interval = Some(Duration::from_secs(seconds));
        self
    }

    pub fn max_wait_seconds(mut self, seconds: u64) -> Self {
        self.max_wait = Some(Duration::from_secs(seconds));
        self
    }
}

fn read_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(invalid(
            name,
            &raw.to_string_lossy(),
            "value is not valid unicode",
        )),
    }
}

fn read_seconds(name: &str) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = read_var(name)? else {
        return Ok(None);
    };
    let seconds = raw.trim().parse::<f64>().map_err(|e| invalid(name, &raw, e))?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(invalid(name, &raw, "must be a positive number of seconds"));
    }
    Ok(Some(Duration::from_secs_f64(seconds)))
}

fn invalid(name: &str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

mod seconds {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(D::Error::custom(format!(
                "expected a positive number of seconds, got {seconds}"
            )));
        }
        Ok(Duration::from_secs_f64(seconds))
    }
}

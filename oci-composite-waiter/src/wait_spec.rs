//! The caller's description of a wait: terminal states plus timing.

use crate::config::{WaiterConfig, WaiterOptions};
use crate::lifecycle::HasLifecycleState;
use crate::waiter::Waiter;
use std::time::Duration;

/// Acceptable terminal lifecycle states together with the timing of the wait.
///
/// States are compared case-insensitively:
///
/// ```
/// use oci_composite_waiter::{WaitSpec, WaiterConfig};
///
/// let spec = WaitSpec::new(["ACTIVE", "Failed"], WaiterConfig::default());
/// assert!(spec.matches("Active"));
/// assert!(spec.matches("FAILED"));
/// assert!(!spec.matches("CREATING"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WaitSpec {
    states: Vec<String>,
    config: WaiterConfig,
}

impl WaitSpec {
    pub fn new<I, S>(states: I, config: WaiterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            states: states
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
            config,
        }
    }

    pub fn with_options(mut self, options: &WaiterOptions) -> Self {
        self.config = self.config.with_overrides(options);
        self
    }

    /// The terminal states, lowercased.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn config(&self) -> &WaiterConfig {
        &self.config
    }

    pub fn max_interval(&self) -> Duration {
        self.config.max_interval
    }

    pub fn max_wait(&self) -> Duration {
        self.config.max_wait
    }

    pub fn matches(&self, state: &str) -> bool {
        let state = state.to_lowercase();
        self.states.iter().any(|s| *s == state)
    }

    /// Whether the value reports one of the terminal states. Values without a
    /// lifecycle state are never satisfied.
    pub fn is_satisfied_by<T: HasLifecycleState + ?Sized>(&self, value: &T) -> bool {
        value
            .lifecycle_state()
            .is_some_and(|state| self.matches(state))
    }

    /// A waiter running on this spec's timing.
    pub fn waiter(&self) -> Waiter {
        Waiter::new(self.config)
    }
}

//! Pause schedule between polls.

use crate::config::{WaiterConfig, MIN_INTERVAL};
use rand::Rng;
use std::time::Duration;

/// Doubling delays starting at the base interval and capped at the max
/// interval, each randomized by the configured jitter fraction. Neither
/// interval goes below [`MIN_INTERVAL`].
#[derive(Debug, Clone)]
pub(crate) struct Backoff {
    current: Duration,
    max: Duration,
    jitter: f64,
}

impl Backoff {
    pub(crate) fn new(config: &WaiterConfig) -> Self {
        let max = config.max_interval.max(MIN_INTERVAL);
        Self {
            current: config.base_interval.clamp(MIN_INTERVAL, max),
            max,
            jitter: config.jitter.clamp(0.0, 1.0),
        }
    }

    /// The pause before the next poll. Never exceeds the max interval.
    pub(crate) fn next_delay(&mut self) -> Duration {
        let delay = jittered(self.current, self.jitter).min(self.max);
        self.current = self.current.saturating_mul(2).min(self.max);
        delay
    }
}

fn jittered(delay: Duration, jitter: f64) -> Duration {
    if jitter <= 0.0 || delay.is_zero() {
        return delay;
    }
    let factor = rand::thread_rng().gen_range((1.0 - jitter)..=(1.0 + jitter));
    delay.mul_f64(factor)
}

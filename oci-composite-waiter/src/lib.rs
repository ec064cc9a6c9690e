//! Bounded-time waiting for OCI resource lifecycle states:
//! - [`Waiter`]: sequential polling with capped exponential backoff, jitter,
//!   optional not-found-as-success and cancellation
//! - [`WaitSpec`]: case-insensitive terminal states plus wait timing
//! - [`WaiterConfig`] / [`WaiterOptions`]: named defaults and per-call overrides
//! - [`HasLifecycleState`]: what a polled value must expose
//!
//! ```
//! use oci_composite_waiter::{ApiResult, HasLifecycleState, WaitOutcome, WaitSpec, WaiterConfig};
//!
//! struct Volume {
//!     state: &'static str,
//! }
//!
//! impl HasLifecycleState for Volume {
//!     fn lifecycle_state(&self) -> Option<&str> {
//!         Some(self.state)
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let spec = WaitSpec::new(["AVAILABLE"], WaiterConfig::default());
//! let outcome = spec
//!     .waiter()
//!     .wait_until(
//!         || async { ApiResult::Ok(Volume { state: "Available" }) },
//!         |volume| spec.is_satisfied_by(volume),
//!     )
//!     .await
//!     .unwrap();
//! assert!(matches!(outcome, WaitOutcome::Reached(_)));
//! # }
//! ```

mod backoff;
mod config;
mod error;
mod lifecycle;
mod response;
mod wait_spec;
mod waiter;

pub use config::{
    WaiterConfig, WaiterOptions, DEFAULT_BASE_INTERVAL, DEFAULT_JITTER, DEFAULT_MAX_INTERVAL,
    DEFAULT_MAX_WAIT, ENV_BASE_INTERVAL_SECONDS, ENV_JITTER, ENV_MAX_INTERVAL_SECONDS,
    ENV_MAX_WAIT_SECONDS, MIN_INTERVAL,
};
pub use error::{ApiError, ApiResult, ConfigError, WaitError, WaitResult};
pub use lifecycle::HasLifecycleState;
pub use response::{Response, ResponseHeaders};
pub use wait_spec::WaitSpec;
pub use waiter::{WaitOutcome, Waiter};
pub use tokio_util::sync::CancellationToken;

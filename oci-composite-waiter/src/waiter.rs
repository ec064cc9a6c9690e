//! The polling loop.

use crate::backoff::Backoff;
use crate::config::WaiterConfig;
use crate::error::{ApiResult, WaitError, WaitResult};
use crate::lifecycle::HasLifecycleState;
use crate::wait_spec::WaitSpec;
use std::future::Future;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// How a successful wait ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome<T> {
    /// The last poll result, for which the condition held.
    Reached(T),
    /// The resource was reported as not found and that counted as success.
    Gone,
}

impl<T> WaitOutcome<T> {
    pub fn into_reached(self) -> Option<T> {
        match self {
            Self::Reached(value) => Some(value),
            Self::Gone => None,
        }
    }

    pub fn is_gone(&self) -> bool {
        matches!(self, Self::Gone)
    }
}

/// Polls a status call until a condition holds, the resource disappears
/// (when allowed) or the wait budget is exhausted.
///
/// Polls are strictly sequential. Between polls the waiter sleeps for a
/// doubling delay capped at [`WaiterConfig::max_interval`]; the final sleep
/// is shortened so one last poll lands exactly at
/// [`WaiterConfig::max_wait`]. A poll still in flight when the budget runs
/// out is abandoned and the wait times out. Transient poll errors are
/// retried within the budget, not-found errors end the wait (successfully
/// only with [`Waiter::succeed_on_not_found`]) and any other error is
/// returned at once.
#[derive(Debug, Clone, Default)]
pub struct Waiter {
    config: WaiterConfig,
    succeed_on_not_found: bool,
    cancellation: Option<CancellationToken>,
}

impl Waiter {
    pub fn new(config: WaiterConfig) -> Self {
        Self {
            config,
            succeed_on_not_found: false,
            cancellation: None,
        }
    }

    /// Treat a not-found poll result as successful completion.
    pub fn succeed_on_not_found(mut self, succeed_on_not_found: bool) -> Self {
        self.succeed_on_not_found = succeed_on_not_found;
        self
    }

    /// Abort the wait (between polls) once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &WaiterConfig {
        &self.config
    }

    pub async fn wait_until<T, F, Fut, P>(
        &self,
        mut poll: F,
        predicate: P,
    ) -> WaitResult<WaitOutcome<T>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
        P: Fn(&T) -> bool,
    {
        let start = Instant::now();
        let max_wait = self.config.max_wait;
        let mut backoff = Backoff::new(&self.config);
        let mut polls: u32 = 0;

        loop {
            if self.is_cancelled() {
                return Err(WaitError::Cancelled { polls });
            }

            polls += 1;
            let remaining = max_wait.saturating_sub(start.elapsed());
            let Ok(result) = tokio::time::timeout(remaining, poll()).await else {
                log::warn!(
                    "Poll {polls} still pending when the maximum wait time of {max_wait:?} ran out"
                );
                return Err(WaitError::TimedOut {
                    max_wait,
                    elapsed: start.elapsed(),
                    polls,
                    last_error: None,
                });
            };
            let last_error = match result {
                Ok(value) if predicate(&value) => {
                    log::debug!(
                        "Wait condition met after {polls} polls ({:?} elapsed)",
                        start.elapsed()
                    );
                    return Ok(WaitOutcome::Reached(value));
                }
                Ok(_) => {
                    log::trace!("Poll {polls}: condition not met yet");
                    None
                }
                Err(err) if err.is_not_found() => {
                    if self.succeed_on_not_found {
                        log::debug!("Resource gone after {polls} polls, treating as success");
                        return Ok(WaitOutcome::Gone);
                    }
                    return Err(WaitError::NotFound(err));
                }
                Err(err) if err.is_transient() => {
                    log::warn!("Poll {polls} failed with a transient error, will retry: {err}");
                    Some(err)
                }
                Err(err) => {
                    log::warn!("Poll {polls} failed: {err}");
                    return Err(WaitError::Poll(err));
                }
            };

            let elapsed = start.elapsed();
            if elapsed >= max_wait {
                log::warn!("Giving up after {polls} polls: maximum wait time of {max_wait:?} exceeded");
                return Err(WaitError::TimedOut {
                    max_wait,
                    elapsed,
                    polls,
                    last_error,
                });
            }

            let delay = backoff.next_delay().min(max_wait - elapsed);
            log::trace!("Sleeping {delay:?} before poll {}", polls + 1);
            match &self.cancellation {
                Some(token) => {
                    tokio::select! {
                        () = tokio::time::sleep(delay) => {}
                        () = token.cancelled() => {
                            log::debug!("Wait cancelled after {polls} polls");
                            return Err(WaitError::Cancelled { polls });
                        }
                    }
                }
                None => tokio::time::sleep(delay).await,
            }
        }
    }

    /// [`Waiter::wait_until`] with the condition that the polled value reports
    /// one of `spec`'s terminal states.
    pub async fn wait_for_state<T, F, Fut>(
        &self,
        poll: F,
        spec: &WaitSpec,
    ) -> WaitResult<WaitOutcome<T>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
        T: HasLifecycleState,
    {
        self.wait_until(poll, |value| spec.is_satisfied_by(value)).await
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

//! The mutate-then-wait orchestration shared by every composite operation.

use std::future::Future;

use oci_composite_waiter::{
    ApiResult, CancellationToken, ConfigError, HasLifecycleState, Response, WaitOutcome,
    WaitResult, WaitSpec, Waiter, WaiterConfig, WaiterOptions,
};

use super::dispatch::OperationDescriptor;
use crate::error::{CompositeOperationError, CompositeResult};

/// What a composite operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome<M, T> {
    /// No terminal states were requested: the mutating call's own response.
    Submitted(M),
    /// The last polled snapshot, in one of the requested states.
    Reached(Response<T>),
    /// The resource no longer exists.
    Gone,
}

impl<M, T> OperationOutcome<M, T> {
    pub fn reached(&self) -> Option<&Response<T>> {
        match self {
            Self::Reached(response) => Some(response),
            Self::Submitted(_) | Self::Gone => None,
        }
    }

    pub fn into_submitted(self) -> Option<M> {
        match self {
            Self::Submitted(result) => Some(result),
            Self::Reached(_) | Self::Gone => None,
        }
    }

    pub fn is_gone(&self) -> bool {
        matches!(self, Self::Gone)
    }
}

/// Runs a mutating call and then waits for the affected resource.
///
/// Failures of the mutating call (and of the pre-fetch of the delete shape)
/// are returned as they are. Once the mutating call has succeeded, any wait
/// failure is wrapped in a [`CompositeOperationError`] that keeps the
/// mutating call's response.
#[derive(Debug, Clone, Default)]
pub struct CompositeOperation {
    config: WaiterConfig,
    cancellation: Option<CancellationToken>,
}

impl CompositeOperation {
    pub fn new(config: WaiterConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    /// Default waiter timing overridden by `OCI_WAITER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        WaiterConfig::from_env().map(Self::new)
    }

    /// Abort waits between polls once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &WaiterConfig {
        &self.config
    }

    /// Create/update/attach/action shape: mutate, read the affected
    /// resource's id from the response, then poll `get(id)`.
    pub async fn persisted<M, T, MFut, I, G, GFut, S>(
        &self,
        descriptor: &OperationDescriptor,
        mutate: MFut,
        resource_id: I,
        get: G,
        wait_for_states: &[S],
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<M, T>
    where
        MFut: Future<Output = ApiResult<M>>,
        I: FnOnce(&M) -> String,
        G: FnMut(String) -> GFut,
        GFut: Future<Output = ApiResult<Response<T>>>,
        T: HasLifecycleState,
        S: AsRef<str>,
    {
        let result = mutate.await?;
        if wait_for_states.is_empty() {
            log::debug!("{}: no terminal states requested, not waiting", descriptor.name);
            return Ok(OperationOutcome::Submitted(result));
        }

        let id = resource_id(&result);
        let spec = self.wait_spec(wait_for_states, waiter_options);
        let waited = self.wait(descriptor, &id, get, &spec, false).await;
        finish(descriptor, result, waited)
    }

    /// Delete/terminate/detach shape: fetch the resource first, mutate, then
    /// poll `get(id)` treating not-found as success.
    pub async fn removed<M, T, G, GFut, MF, MFut, S>(
        &self,
        descriptor: &OperationDescriptor,
        resource_id: &str,
        mut get: G,
        mutate: MF,
        wait_for_states: &[S],
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<M, T>
    where
        G: FnMut(String) -> GFut,
        GFut: Future<Output = ApiResult<Response<T>>>,
        MF: FnOnce() -> MFut,
        MFut: Future<Output = ApiResult<M>>,
        T: HasLifecycleState,
        S: AsRef<str>,
    {
        if wait_for_states.is_empty() {
            log::debug!("{}: no terminal states requested, not waiting", descriptor.name);
            return Ok(OperationOutcome::Submitted(mutate().await?));
        }

        let initial = get(resource_id.to_string()).await?;
        log::debug!(
            "{}: {} is {} before {}",
            descriptor.name,
            resource_id,
            initial.lifecycle_state().unwrap_or("in an unknown state"),
            descriptor.mutate
        );

        let result = mutate().await?;
        let spec = self.wait_spec(wait_for_states, waiter_options);
        let waited = self.wait(descriptor, resource_id, get, &spec, true).await;
        finish(descriptor, result, waited)
    }

    fn wait_spec<S: AsRef<str>>(&self, states: &[S], options: &WaiterOptions) -> WaitSpec {
        WaitSpec::new(states, self.config).with_options(options)
    }

    async fn wait<T, G, GFut>(
        &self,
        descriptor: &OperationDescriptor,
        resource_id: &str,
        mut get: G,
        spec: &WaitSpec,
        succeed_on_not_found: bool,
    ) -> WaitResult<WaitOutcome<Response<T>>>
    where
        G: FnMut(String) -> GFut,
        GFut: Future<Output = ApiResult<Response<T>>>,
        T: HasLifecycleState,
    {
        log::info!(
            "{}: waiting up to {:?} for {} to reach one of {:?} via {}",
            descriptor.name,
            spec.max_wait(),
            resource_id,
            spec.states(),
            descriptor.get
        );
        let mut waiter: Waiter = spec.waiter().succeed_on_not_found(succeed_on_not_found);
        if let Some(token) = &self.cancellation {
            waiter = waiter.with_cancellation(token.clone());
        }
        waiter
            .wait_for_state(|| get(resource_id.to_string()), spec)
            .await
    }
}

fn finish<M, T>(
    descriptor: &OperationDescriptor,
    result: M,
    waited: WaitResult<WaitOutcome<Response<T>>>,
) -> CompositeResult<M, T> {
    match waited {
        Ok(WaitOutcome::Reached(response)) => Ok(OperationOutcome::Reached(response)),
        Ok(WaitOutcome::Gone) => Ok(OperationOutcome::Gone),
        Err(source) => {
            log::warn!(
                "{}: {} succeeded but waiting failed: {source}",
                descriptor.name,
                descriptor.mutate
            );
            Err(CompositeOperationError::new(descriptor.name, vec![result], source).into())
        }
    }
}

//! Errors raised by composite operations.

use oci_composite_waiter::{ApiError, WaitError};
use thiserror::Error;

use crate::composite::OperationOutcome;

/// The mutating call succeeded but waiting for its effect did not.
///
/// `partial_results` holds every result produced before the failure; its
/// first element is the mutating call's own response, so callers can still
/// tell whether the change took effect.
#[derive(Debug, Error)]
#[error("{operation} failed while waiting for the resource: {source}")]
pub struct CompositeOperationError<M> {
    operation: &'static str,
    partial_results: Vec<M>,
    #[source]
    source: WaitError,
}

impl<M> CompositeOperationError<M> {
    pub fn new(operation: &'static str, partial_results: Vec<M>, source: WaitError) -> Self {
        Self {
            operation,
            partial_results,
            source,
        }
    }

    /// Name of the composite operation that failed.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn partial_results(&self) -> &[M] {
        &self.partial_results
    }

    pub fn into_partial_results(self) -> Vec<M> {
        self.partial_results
    }

    pub fn wait_error(&self) -> &WaitError {
        &self.source
    }

    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }
}

/// Failure of a composite operation.
#[derive(Debug, Error)]
pub enum CompositeError<M> {
    /// A service call failed before anything was waited on. The error is the
    /// one the call returned, unwrapped.
    #[error(transparent)]
    Operation(#[from] ApiError),

    #[error(transparent)]
    Wait(#[from] CompositeOperationError<M>),
}

impl<M> CompositeError<M> {
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Operation(err) => Some(err),
            Self::Wait(_) => None,
        }
    }

    pub fn as_wait_failure(&self) -> Option<&CompositeOperationError<M>> {
        match self {
            Self::Operation(_) => None,
            Self::Wait(err) => Some(err),
        }
    }
}

/// Result of a composite operation whose mutating call returns `M` and whose
/// polled resource is `T`.
pub type CompositeResult<M, T> = Result<OperationOutcome<M, T>, CompositeError<M>>;

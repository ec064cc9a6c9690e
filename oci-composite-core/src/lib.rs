//! Composite operations for the OCI Compute and Virtual Network services:
//! - Mutating calls followed by a bounded wait for a lifecycle state
//! - Delete/terminate/detach calls that treat a vanished resource as success
//! - Partial results on wait failures, so callers know the change was made
//!
//! Service calls are made through the [`ComputeApi`] and
//! [`VirtualNetworkApi`] traits; waiting is done by `oci-composite-waiter`.

pub mod clients;
pub mod composite;
mod error;
pub mod models;
mod options;

pub use clients::{ComputeApi, VirtualNetworkApi};
pub use composite::{
    find_operation, CallShape, CompositeOperation, ComputeClientCompositeOperations,
    OperationDescriptor, OperationOutcome, VirtualNetworkClientCompositeOperations,
};
pub use error::{CompositeError, CompositeOperationError, CompositeResult};
pub use options::{RequestOptions, RetryConfig};

// Waiting primitives callers need alongside composite operations
pub use oci_composite_waiter::{
    ApiError, ApiResult, CancellationToken, ConfigError, HasLifecycleState, Response,
    ResponseHeaders, WaitError, WaiterConfig, WaiterOptions,
};

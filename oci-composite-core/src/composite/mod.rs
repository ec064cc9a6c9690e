//! Composite operations: a mutating service call followed by a bounded wait
//! for the affected resource to reach one of the requested states.

mod compute;
pub mod dispatch;
mod operation;
mod virtual_network;

pub use compute::ComputeClientCompositeOperations;
pub use dispatch::{
    find_operation, CallShape, OperationDescriptor, COMPUTE_OPERATIONS,
    VIRTUAL_NETWORK_OPERATIONS,
};
pub use operation::{CompositeOperation, OperationOutcome};
pub use virtual_network::VirtualNetworkClientCompositeOperations;

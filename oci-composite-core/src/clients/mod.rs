//! Service-call contracts the composite operations drive.
//!
//! Request marshaling, signing, transport and per-call retries live behind
//! these traits; implementations report a missing resource as a 404
//! [`ApiError`](oci_composite_waiter::ApiError) so waits can tell "gone"
//! apart from other failures.

mod compute;
mod virtual_network;

pub use compute::ComputeApi;
pub use virtual_network::VirtualNetworkApi;

//! The table of composite operations: for each one, the mutating call it
//! issues, the get call it polls and the shape of the call.

/// How a composite operation locates the resource it waits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// The resource outlives the call (create, update, attach, action): its
    /// id is read from the mutating call's response and then polled.
    Persisted,
    /// The resource is expected to disappear (delete, terminate, detach): it
    /// is fetched before mutating, and not-found while polling is success.
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub mutate: &'static str,
    pub get: &'static str,
    pub shape: CallShape,
}

impl OperationDescriptor {
    const fn persisted(name: &'static str, mutate: &'static str, get: &'static str) -> Self {
        Self {
            name,
            mutate,
            get,
            shape: CallShape::Persisted,
        }
    }

    const fn removed(name: &'static str, mutate: &'static str, get: &'static str) -> Self {
        Self {
            name,
            mutate,
            get,
            shape: CallShape::Removed,
        }
    }
}

// Compute
pub const LAUNCH_INSTANCE: OperationDescriptor = OperationDescriptor::persisted(
    "launch_instance_and_wait_for_state",
    "launch_instance",
    "get_instance",
);
pub const UPDATE_INSTANCE: OperationDescriptor = OperationDescriptor::persisted(
    "update_instance_and_wait_for_state",
    "update_instance",
    "get_instance",
);
pub const INSTANCE_ACTION: OperationDescriptor = OperationDescriptor::persisted(
    "instance_action_and_wait_for_state",
    "instance_action",
    "get_instance",
);
pub const TERMINATE_INSTANCE: OperationDescriptor = OperationDescriptor::removed(
    "terminate_instance_and_wait_for_state",
    "terminate_instance",
    "get_instance",
);
pub const ATTACH_VNIC: OperationDescriptor = OperationDescriptor::persisted(
    "attach_vnic_and_wait_for_state",
    "attach_vnic",
    "get_vnic_attachment",
);
pub const DETACH_VNIC: OperationDescriptor = OperationDescriptor::removed(
    "detach_vnic_and_wait_for_state",
    "detach_vnic",
    "get_vnic_attachment",
);
pub const ATTACH_VOLUME: OperationDescriptor = OperationDescriptor::persisted(
    "attach_volume_and_wait_for_state",
    "attach_volume",
    "get_volume_attachment",
);
pub const DETACH_VOLUME: OperationDescriptor = OperationDescriptor::removed(
    "detach_volume_and_wait_for_state",
    "detach_volume",
    "get_volume_attachment",
);
pub const CREATE_IMAGE: OperationDescriptor = OperationDescriptor::persisted(
    "create_image_and_wait_for_state",
    "create_image",
    "get_image",
);
pub const DELETE_IMAGE: OperationDescriptor = OperationDescriptor::removed(
    "delete_image_and_wait_for_state",
    "delete_image",
    "get_image",
);

// Virtual Network
pub const CREATE_VCN: OperationDescriptor =
    OperationDescriptor::persisted("create_vcn_and_wait_for_state", "create_vcn", "get_vcn");
pub const UPDATE_VCN: OperationDescriptor =
    OperationDescriptor::persisted("update_vcn_and_wait_for_state", "update_vcn", "get_vcn");
pub const DELETE_VCN: OperationDescriptor =
    OperationDescriptor::removed("delete_vcn_and_wait_for_state", "delete_vcn", "get_vcn");
pub const CREATE_SUBNET: OperationDescriptor = OperationDescriptor::persisted(
    "create_subnet_and_wait_for_state",
    "create_subnet",
    "get_subnet",
);
pub const DELETE_SUBNET: OperationDescriptor = OperationDescriptor::removed(
    "delete_subnet_and_wait_for_state",
    "delete_subnet",
    "get_subnet",
);
pub const CREATE_DRG: OperationDescriptor =
    OperationDescriptor::persisted("create_drg_and_wait_for_state", "create_drg", "get_drg");
pub const DELETE_DRG: OperationDescriptor =
    OperationDescriptor::removed("delete_drg_and_wait_for_state", "delete_drg", "get_drg");
pub const CREATE_DRG_ATTACHMENT: OperationDescriptor = OperationDescriptor::persisted(
    "create_drg_attachment_and_wait_for_state",
    "create_drg_attachment",
    "get_drg_attachment",
);
pub const DELETE_DRG_ATTACHMENT: OperationDescriptor = OperationDescriptor::removed(
    "delete_drg_attachment_and_wait_for_state",
    "delete_drg_attachment",
    "get_drg_attachment",
);
pub const CREATE_INTERNET_GATEWAY: OperationDescriptor = OperationDescriptor::persisted(
    "create_internet_gateway_and_wait_for_state",
    "create_internet_gateway",
    "get_internet_gateway",
);
pub const DELETE_INTERNET_GATEWAY: OperationDescriptor = OperationDescriptor::removed(
    "delete_internet_gateway_and_wait_for_state",
    "delete_internet_gateway",
    "get_internet_gateway",
);

pub const COMPUTE_OPERATIONS: &[OperationDescriptor] = &[
    LAUNCH_INSTANCE,
    UPDATE_INSTANCE,
    INSTANCE_ACTION,
    TERMINATE_INSTANCE,
    ATTACH_VNIC,
    DETACH_VNIC,
    ATTACH_VOLUME,
    DETACH_VOLUME,
    CREATE_IMAGE,
    DELETE_IMAGE,
];

pub const VIRTUAL_NETWORK_OPERATIONS: &[OperationDescriptor] = &[
    CREATE_VCN,
    UPDATE_VCN,
    DELETE_VCN,
    CREATE_SUBNET,
    DELETE_SUBNET,
    CREATE_DRG,
    DELETE_DRG,
    CREATE_DRG_ATTACHMENT,
    DELETE_DRG_ATTACHMENT,
    CREATE_INTERNET_GATEWAY,
    DELETE_INTERNET_GATEWAY,
];

/// Look up a composite operation by name, e.g.
/// `"delete_vcn_and_wait_for_state"`.
pub fn find_operation(name: &str) -> Option<&'static OperationDescriptor> {
    COMPUTE_OPERATIONS
        .iter()
        .chain(VIRTUAL_NETWORK_OPERATIONS)
        .find(|descriptor| descriptor.name == name)
}

//! Virtual Network service resources.

use serde::{Deserialize, Serialize};

lifecycle_state_enum!(VcnLifecycleState {
    Provisioning => "PROVISIONING",
    Available => "AVAILABLE",
    Terminating => "TERMINATING",
    Terminated => "TERMINATED",
    Updating => "UPDATING",
});

lifecycle_state_enum!(SubnetLifecycleState {
    Provisioning => "PROVISIONING",
    Available => "AVAILABLE",
    Terminating => "TERMINATING",
    Terminated => "TERMINATED",
    Updating => "UPDATING",
});

lifecycle_state_enum!(DrgLifecycleState {
    Provisioning => "PROVISIONING",
    Available => "AVAILABLE",
    Terminating => "TERMINATING",
    Terminated => "TERMINATED",
});

lifecycle_state_enum!(DrgAttachmentLifecycleState {
    Attaching => "ATTACHING",
    Attached => "ATTACHED",
    Detaching => "DETACHING",
    Detached => "DETACHED",
});

lifecycle_state_enum!(InternetGatewayLifecycleState {
    Provisioning => "PROVISIONING",
    Available => "AVAILABLE",
    Terminating => "TERMINATING",
    Terminated => "TERMINATED",
});

has_lifecycle_state!(Vcn, Subnet, Drg, DrgAttachment, InternetGateway);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vcn {
    pub id: String,
    pub compartment_id: String,
    #[serde(default)]
    pub cidr_blocks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    pub lifecycle_state: VcnLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVcnDetails {
    pub compartment_id: String,
    pub cidr_blocks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVcnDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    pub id: String,
    pub compartment_id: String,
    pub vcn_id: String,
    pub cidr_block: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub lifecycle_state: SubnetLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubnetDetails {
    pub compartment_id: String,
    pub vcn_id: String,
    pub cidr_block: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drg {
    pub id: String,
    pub compartment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub lifecycle_state: DrgLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrgDetails {
    pub compartment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrgAttachment {
    pub id: String,
    pub compartment_id: String,
    pub drg_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcn_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub lifecycle_state: DrgAttachmentLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrgAttachmentDetails {
    pub drg_id: String,
    pub vcn_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternetGateway {
    pub id: String,
    pub compartment_id: String,
    pub vcn_id: String,
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub lifecycle_state: InternetGatewayLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternetGatewayDetails {
    pub compartment_id: String,
    pub vcn_id: String,
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

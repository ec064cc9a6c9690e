//! Compute service resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

lifecycle_state_enum!(InstanceLifecycleState {
    Moving => "MOVING",
    Provisioning => "PROVISIONING",
    Running => "RUNNING",
    Starting => "STARTING",
    Stopping => "STOPPING",
    Stopped => "STOPPED",
    CreatingImage => "CREATING_IMAGE",
    Terminating => "TERMINATING",
    Terminated => "TERMINATED",
});

lifecycle_state_enum!(VnicAttachmentLifecycleState {
    Attaching => "ATTACHING",
    Attached => "ATTACHED",
    Detaching => "DETACHING",
    Detached => "DETACHED",
});

lifecycle_state_enum!(VolumeAttachmentLifecycleState {
    Attaching => "ATTACHING",
    Attached => "ATTACHED",
    Detaching => "DETACHING",
    Detached => "DETACHED",
});

lifecycle_state_enum!(ImageLifecycleState {
    Provisioning => "PROVISIONING",
    Importing => "IMPORTING",
    Available => "AVAILABLE",
    Exporting => "EXPORTING",
    Disabled => "DISABLED",
    Deleted => "DELETED",
});

has_lifecycle_state!(Instance, VnicAttachment, VolumeAttachment, Image);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    pub compartment_id: String,
    pub availability_domain: String,
    pub shape: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub lifecycle_state: InstanceLifecycleState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceDetails {
    pub compartment_id: String,
    pub availability_domain: String,
    pub shape: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

/// Power actions accepted by the instance action endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstanceAction {
    Start,
    Stop,
    Reset,
    Softstop,
    Softreset,
}

impl InstanceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Stop => "STOP",
            Self::Reset => "RESET",
            Self::Softstop => "SOFTSTOP",
            Self::Softreset => "SOFTRESET",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VnicAttachment {
    pub id: String,
    pub compartment_id: String,
    pub availability_domain: String,
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnic_id: Option<String>,
    pub lifecycle_state: VnicAttachmentLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachVnicDetails {
    pub instance_id: String,
    pub subnet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAttachment {
    pub id: String,
    pub compartment_id: String,
    pub availability_domain: String,
    pub instance_id: String,
    pub volume_id: String,
    pub attachment_type: String,
    pub lifecycle_state: VolumeAttachmentLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachVolumeDetails {
    pub instance_id: String,
    pub volume_id: String,
    /// `iscsi`, `paravirtualized`, ...
    #[serde(rename = "type")]
    pub attachment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub compartment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub lifecycle_state: ImageLifecycleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageDetails {
    pub compartment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

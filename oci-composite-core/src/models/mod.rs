//! Minimal Compute and Virtual Network resource models: identifiers, a few
//! descriptive fields and the lifecycle state the waiter polls.
//!
//! Field names follow the services' JSON (`camelCase`); lifecycle states are
//! `SCREAMING_SNAKE_CASE`, and states this client does not know deserialize
//! to `UnknownEnumValue` instead of failing.

/// Declares a lifecycle-state enum with its wire names.
macro_rules! lifecycle_state_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
            #[serde(rename = "UNKNOWN_ENUM_VALUE", other)]
            UnknownEnumValue,
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::UnknownEnumValue => "UNKNOWN_ENUM_VALUE",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Implements `HasLifecycleState` for models with a `lifecycle_state` field.
macro_rules! has_lifecycle_state {
    ($($model:ty),+ $(,)?) => {
        $(
            impl oci_composite_waiter::HasLifecycleState for $model {
                fn lifecycle_state(&self) -> Option<&str> {
                    Some(self.lifecycle_state.as_str())
                }
            }
        )+
    };
}

pub mod compute;
pub mod virtual_network;

pub use compute::{
    AttachVnicDetails, AttachVolumeDetails, CreateImageDetails, Image, ImageLifecycleState,
    Instance, InstanceAction, InstanceLifecycleState, LaunchInstanceDetails,
    UpdateInstanceDetails, VnicAttachment, VnicAttachmentLifecycleState, VolumeAttachment,
    VolumeAttachmentLifecycleState,
};
pub use virtual_network::{
    CreateDrgAttachmentDetails, CreateDrgDetails, CreateInternetGatewayDetails,
    CreateSubnetDetails, CreateVcnDetails, Drg, DrgAttachment, DrgAttachmentLifecycleState,
    DrgLifecycleState, InternetGateway, InternetGatewayLifecycleState, Subnet,
    SubnetLifecycleState, UpdateVcnDetails, Vcn, VcnLifecycleState,
};

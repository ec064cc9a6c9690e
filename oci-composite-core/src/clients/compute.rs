//! Compute service calls used by the composite operations.

use async_trait::async_trait;
use oci_composite_waiter::{ApiResult, Response};

use crate::models::{
    AttachVnicDetails, AttachVolumeDetails, CreateImageDetails, Image, Instance, InstanceAction,
    LaunchInstanceDetails, UpdateInstanceDetails, VnicAttachment, VolumeAttachment,
};
use crate::options::RequestOptions;

/// The Compute service endpoints used by composite operations.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    async fn launch_instance(
        &self,
        details: &LaunchInstanceDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>>;

    async fn get_instance(
        &self,
        instance_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>>;

    async fn update_instance(
        &self,
        instance_id: &str,
        details: &UpdateInstanceDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>>;

    async fn instance_action(
        &self,
        instance_id: &str,
        action: InstanceAction,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>>;

    async fn terminate_instance(
        &self,
        instance_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>>;

    async fn attach_vnic(
        &self,
        details: &AttachVnicDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<VnicAttachment>>;

    async fn get_vnic_attachment(
        &self,
        vnic_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<VnicAttachment>>;

    async fn detach_vnic(
        &self,
        vnic_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>>;

    async fn attach_volume(
        &self,
        details: &AttachVolumeDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<VolumeAttachment>>;

    async fn get_volume_attachment(
        &self,
        volume_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<VolumeAttachment>>;

    async fn detach_volume(
        &self,
        volume_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>>;

    async fn create_image(
        &self,
        details: &CreateImageDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Image>>;

    async fn get_image(&self, image_id: &str, options: &RequestOptions)
        -> ApiResult<Response<Image>>;

    async fn delete_image(&self, image_id: &str, options: &RequestOptions)
        -> ApiResult<Response<()>>;
}

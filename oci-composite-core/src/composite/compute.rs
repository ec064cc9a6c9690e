//! Compute operations that wait for the instance, attachment or image they touch.

use std::sync::Arc;

use oci_composite_waiter::{Response, WaiterOptions};

use super::dispatch;
use super::operation::CompositeOperation;
use crate::clients::ComputeApi;
use crate::error::CompositeResult;
use crate::models::{
    AttachVnicDetails, AttachVolumeDetails, CreateImageDetails, Image, Instance, InstanceAction,
    LaunchInstanceDetails, UpdateInstanceDetails, VnicAttachment, VolumeAttachment,
};
use crate::options::RequestOptions;

/// Compute calls that wait for the affected resource to reach a state.
///
/// `options` is passed unchanged to the mutating call and to every get call
/// made while waiting. An empty `wait_for_states` returns the mutating
/// call's response without polling.
pub struct ComputeClientCompositeOperations<C> {
    client: Arc<C>,
    operation: CompositeOperation,
}

impl<C> Clone for ComputeClientCompositeOperations<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            operation: self.operation.clone(),
        }
    }
}

impl<C: ComputeApi> ComputeClientCompositeOperations<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self::with_operation(client, CompositeOperation::default())
    }

    pub fn with_operation(client: Arc<C>, operation: CompositeOperation) -> Self {
        Self { client, operation }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn operation(&self) -> &CompositeOperation {
        &self.operation
    }

    pub async fn launch_instance_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &LaunchInstanceDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Instance>, Instance> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::LAUNCH_INSTANCE,
                client.launch_instance(details, options),
                |response: &Response<Instance>| response.data.id.clone(),
                move |id| async move { client.get_instance(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn update_instance_and_wait_for_state<S: AsRef<str>>(
        &self,
        instance_id: &str,
        details: &UpdateInstanceDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Instance>, Instance> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::UPDATE_INSTANCE,
                client.update_instance(instance_id, details, options),
                |response: &Response<Instance>| response.data.id.clone(),
                move |id| async move { client.get_instance(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    /// Runs a power action (start, stop, reset, ...) on an instance.
    pub async fn instance_action_and_wait_for_state<S: AsRef<str>>(
        &self,
        instance_id: &str,
        action: InstanceAction,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Instance>, Instance> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::INSTANCE_ACTION,
                client.instance_action(instance_id, action, options),
                |response: &Response<Instance>| response.data.id.clone(),
                move |id| async move { client.get_instance(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    /// Terminates an instance. An instance that disappears while waiting
    /// yields [`OperationOutcome::Gone`](super::OperationOutcome::Gone).
    pub async fn terminate_instance_and_wait_for_state<S: AsRef<str>>(
        &self,
        instance_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, Instance> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::TERMINATE_INSTANCE,
                instance_id,
                move |id| async move { client.get_instance(&id, options).await },
                || client.terminate_instance(instance_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn attach_vnic_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &AttachVnicDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<VnicAttachment>, VnicAttachment> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::ATTACH_VNIC,
                client.attach_vnic(details, options),
                |response: &Response<VnicAttachment>| response.data.id.clone(),
                move |id| async move { client.get_vnic_attachment(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn detach_vnic_and_wait_for_state<S: AsRef<str>>(
        &self,
        vnic_attachment_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, VnicAttachment> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DETACH_VNIC,
                vnic_attachment_id,
                move |id| async move { client.get_vnic_attachment(&id, options).await },
                || client.detach_vnic(vnic_attachment_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn attach_volume_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &AttachVolumeDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<VolumeAttachment>, VolumeAttachment> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::ATTACH_VOLUME,
                client.attach_volume(details, options),
                |response: &Response<VolumeAttachment>| response.data.id.clone(),
                move |id| async move { client.get_volume_attachment(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn detach_volume_and_wait_for_state<S: AsRef<str>>(
        &self,
        volume_attachment_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, VolumeAttachment> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DETACH_VOLUME,
                volume_attachment_id,
                move |id| async move { client.get_volume_attachment(&id, options).await },
                || client.detach_volume(volume_attachment_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn create_image_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &CreateImageDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Image>, Image> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::CREATE_IMAGE,
                client.create_image(details, options),
                |response: &Response<Image>| response.data.id.clone(),
                move |id| async move { client.get_image(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn delete_image_and_wait_for_state<S: AsRef<str>>(
        &self,
        image_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, Image> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DELETE_IMAGE,
                image_id,
                move |id| async move { client.get_image(&id, options).await },
                || client.delete_image(image_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }
}

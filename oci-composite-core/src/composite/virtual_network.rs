//! Virtual Network operations that wait for the networking resource they
//! create, update or delete.

use std::sync::Arc;

use oci_composite_waiter::{Response, WaiterOptions};

use super::dispatch;
use super::operation::CompositeOperation;
use crate::clients::VirtualNetworkApi;
use crate::error::CompositeResult;
use crate::models::{
    CreateDrgAttachmentDetails, CreateDrgDetails, CreateInternetGatewayDetails,
    CreateSubnetDetails, CreateVcnDetails, Drg, DrgAttachment, InternetGateway, Subnet,
    UpdateVcnDetails, Vcn,
};
use crate::options::RequestOptions;

/// Virtual Network calls that wait for the affected resource to reach a state.
///
/// Deletes fetch the resource before deleting it and count a resource that
/// disappears while waiting as success.
pub struct VirtualNetworkClientCompositeOperations<C> {
    client: Arc<C>,
    operation: CompositeOperation,
}

impl<C> Clone for VirtualNetworkClientCompositeOperations<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            operation: self.operation.clone(),
        }
    }
}

impl<C: VirtualNetworkApi> VirtualNetworkClientCompositeOperations<C> {
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

    pub async fn create_vcn_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &CreateVcnDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Vcn>, Vcn> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::CREATE_VCN,
                client.create_vcn(details, options),
                |response: &Response<Vcn>| response.data.id.clone(),
                move |id| async move { client.get_vcn(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn update_vcn_and_wait_for_state<S: AsRef<str>>(
        &self,
        vcn_id: &str,
        details: &UpdateVcnDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Vcn>, Vcn> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::UPDATE_VCN,
                client.update_vcn(vcn_id, details, options),
                |response: &Response<Vcn>| response.data.id.clone(),
                move |id| async move { client.get_vcn(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn delete_vcn_and_wait_for_state<S: AsRef<str>>(
        &self,
        vcn_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, Vcn> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DELETE_VCN,
                vcn_id,
                move |id| async move { client.get_vcn(&id, options).await },
                || client.delete_vcn(vcn_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn create_subnet_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &CreateSubnetDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Subnet>, Subnet> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::CREATE_SUBNET,
                client.create_subnet(details, options),
                |response: &Response<Subnet>| response.data.id.clone(),
                move |id| async move { client.get_subnet(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn delete_subnet_and_wait_for_state<S: AsRef<str>>(
        &self,
        subnet_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, Subnet> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DELETE_SUBNET,
                subnet_id,
                move |id| async move { client.get_subnet(&id, options).await },
                || client.delete_subnet(subnet_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn create_drg_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &CreateDrgDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<Drg>, Drg> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::CREATE_DRG,
                client.create_drg(details, options),
                |response: &Response<Drg>| response.data.id.clone(),
                move |id| async move { client.get_drg(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn delete_drg_and_wait_for_state<S: AsRef<str>>(
        &self,
        drg_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, Drg> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DELETE_DRG,
                drg_id,
                move |id| async move { client.get_drg(&id, options).await },
                || client.delete_drg(drg_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn create_drg_attachment_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &CreateDrgAttachmentDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<DrgAttachment>, DrgAttachment> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::CREATE_DRG_ATTACHMENT,
                client.create_drg_attachment(details, options),
                |response: &Response<DrgAttachment>| response.data.id.clone(),
                move |id| async move { client.get_drg_attachment(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn delete_drg_attachment_and_wait_for_state<S: AsRef<str>>(
        &self,
        drg_attachment_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, DrgAttachment> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DELETE_DRG_ATTACHMENT,
                drg_attachment_id,
                move |id| async move { client.get_drg_attachment(&id, options).await },
                || client.delete_drg_attachment(drg_attachment_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn create_internet_gateway_and_wait_for_state<S: AsRef<str>>(
        &self,
        details: &CreateInternetGatewayDetails,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<InternetGateway>, InternetGateway> {
        let client = self.client.as_ref();
        self.operation
            .persisted(
                &dispatch::CREATE_INTERNET_GATEWAY,
                client.create_internet_gateway(details, options),
                |response: &Response<InternetGateway>| response.data.id.clone(),
                move |id| async move { client.get_internet_gateway(&id, options).await },
                wait_for_states,
                waiter_options,
            )
            .await
    }

    pub async fn delete_internet_gateway_and_wait_for_state<S: AsRef<str>>(
        &self,
        ig_id: &str,
        wait_for_states: &[S],
        options: &RequestOptions,
        waiter_options: &WaiterOptions,
    ) -> CompositeResult<Response<()>, InternetGateway> {
        let client = self.client.as_ref();
        self.operation
            .removed(
                &dispatch::DELETE_INTERNET_GATEWAY,
                ig_id,
                move |id| async move { client.get_internet_gateway(&id, options).await },
                || client.delete_internet_gateway(ig_id, options),
                wait_for_states,
                waiter_options,
            )
            .await
    }
}

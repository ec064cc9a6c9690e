//! Virtual Network service calls used by the composite operations.

use async_trait::async_trait;
use oci_composite_waiter::{ApiResult, Response};

use crate::models::{
    CreateDrgAttachmentDetails, CreateDrgDetails, CreateInternetGatewayDetails,
    CreateSubnetDetails, CreateVcnDetails, Drg, DrgAttachment, InternetGateway, Subnet,
    UpdateVcnDetails, Vcn,
};
use crate::options::RequestOptions;

/// The Virtual Network service endpoints used by composite operations.
#[async_trait]
pub trait VirtualNetworkApi: Send + Sync {
    async fn create_vcn(
        &self,
        details: &CreateVcnDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Vcn>>;

    async fn get_vcn(&self, vcn_id: &str, options: &RequestOptions) -> ApiResult<Response<Vcn>>;

    async fn update_vcn(
        &self,
        vcn_id: &str,
        details: &UpdateVcnDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Vcn>>;

    async fn delete_vcn(&self, vcn_id: &str, options: &RequestOptions) -> ApiResult<Response<()>>;

    async fn create_subnet(
        &self,
        details: &CreateSubnetDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Subnet>>;

    async fn get_subnet(
        &self,
        subnet_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<Subnet>>;

    async fn delete_subnet(
        &self,
        subnet_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>>;

    async fn create_drg(
        &self,
        details: &CreateDrgDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Drg>>;

    async fn get_drg(&self, drg_id: &str, options: &RequestOptions) -> ApiResult<Response<Drg>>;

    async fn delete_drg(&self, drg_id: &str, options: &RequestOptions) -> ApiResult<Response<()>>;

    async fn create_drg_attachment(
        &self,
        details: &CreateDrgAttachmentDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<DrgAttachment>>;

    async fn get_drg_attachment(
        &self,
        drg_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<DrgAttachment>>;

    async fn delete_drg_attachment(
        &self,
        drg_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>>;

    async fn create_internet_gateway(
        &self,
        details: &CreateInternetGatewayDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<InternetGateway>>;

    async fn get_internet_gateway(
        &self,
        ig_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<InternetGateway>>;

    async fn delete_internet_gateway(
        &self,
        ig_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>>;
}

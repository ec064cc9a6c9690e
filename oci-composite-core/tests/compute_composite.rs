//! Compute composite operations against an in-memory service whose get
//! calls replay a scripted sequence of lifecycle states.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use oci_composite_core::models::{
    AttachVnicDetails, AttachVolumeDetails, CreateImageDetails, Image, Instance, InstanceAction,
    LaunchInstanceDetails, UpdateInstanceDetails, VnicAttachment, VolumeAttachment,
};
use oci_composite_core::{
    ApiError, ApiResult, CompositeError, CompositeOperation, ComputeApi,
    ComputeClientCompositeOperations, OperationOutcome, RequestOptions, Response, RetryConfig,
    WaitError, WaiterConfig, WaiterOptions,
};
use rstest::rstest;
use serde::de::DeserializeOwned;
use tokio::time::Instant;

/// One recorded service call: method name plus the request id it carried.
type Call = (&'static str, Option<String>);

struct FakeCompute {
    calls: Mutex<Vec<Call>>,
    states: Mutex<VecDeque<ApiResult<&'static str>>>,
    mutate_error: Option<ApiError>,
}

impl FakeCompute {
    fn new(states: Vec<ApiResult<&'static str>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            states: Mutex::new(states.into()),
            mutate_error: None,
        }
    }

    fn with_states(states: &[&'static str]) -> Self {
        Self::new(states.iter().map(|s| Ok(*s)).collect())
    }

    fn failing_mutations(mut self, err: ApiError) -> Self {
        self.mutate_error = Some(err);
        self
    }

    fn record(&self, method: &'static str, options: &RequestOptions) {
        self.calls
            .lock()
            .unwrap()
            .push((method, options.opc_request_id.clone()));
    }

    fn mutate<T>(
        &self,
        method: &'static str,
        options: &RequestOptions,
        data: T,
    ) -> ApiResult<Response<T>> {
        self.record(method, options);
        match &self.mutate_error {
            Some(err) => Err(err.clone()),
            None => Ok(Response::new(200, data).with_request_id(format!("{method}-response"))),
        }
    }

    fn next_state(&self, method: &'static str, options: &RequestOptions) -> ApiResult<&'static str> {
        self.record(method, options);
        let mut states = self.states.lock().unwrap();
        if states.len() > 1 {
            states.pop_front().unwrap()
        } else {
            states.front().cloned().unwrap()
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(m, _)| *m).collect()
    }

    fn request_ids(&self) -> Vec<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, id)| id.clone())
            .collect()
    }
}

fn parse_state<S: DeserializeOwned>(state: &str) -> S {
    serde_json::from_value(serde_json::Value::String(state.to_string())).unwrap()
}

fn instance(id: &str, state: &str) -> Instance {
    Instance {
        id: id.to_string(),
        compartment_id: "ocid1.compartment.oc1..aaaa".to_string(),
        availability_domain: "Uocm:PHX-AD-1".to_string(),
        shape: "VM.Standard.E4.Flex".to_string(),
        display_name: None,
        lifecycle_state: parse_state(state),
        time_created: None,
    }
}

fn vnic_attachment(id: &str, state: &str) -> VnicAttachment {
    VnicAttachment {
        id: id.to_string(),
        compartment_id: "ocid1.compartment.oc1..aaaa".to_string(),
        availability_domain: "Uocm:PHX-AD-1".to_string(),
        instance_id: "ocid1.instance.oc1..inst".to_string(),
        subnet_id: None,
        vnic_id: None,
        lifecycle_state: parse_state(state),
    }
}

fn volume_attachment(id: &str, state: &str) -> VolumeAttachment {
    VolumeAttachment {
        id: id.to_string(),
        compartment_id: "ocid1.compartment.oc1..aaaa".to_string(),
        availability_domain: "Uocm:PHX-AD-1".to_string(),
        instance_id: "ocid1.instance.oc1..inst".to_string(),
        volume_id: "ocid1.volume.oc1..vol".to_string(),
        attachment_type: "paravirtualized".to_string(),
        lifecycle_state: parse_state(state),
    }
}

fn image(id: &str, state: &str) -> Image {
    Image {
        id: id.to_string(),
        compartment_id: "ocid1.compartment.oc1..aaaa".to_string(),
        display_name: None,
        lifecycle_state: parse_state(state),
    }
}

#[async_trait]
impl ComputeApi for FakeCompute {
    async fn launch_instance(
        &self,
        _details: &LaunchInstanceDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>> {
        self.mutate("launch_instance", options, instance("inst-1", "PROVISIONING"))
    }

    async fn get_instance(
        &self,
        instance_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>> {
        let state = self.next_state("get_instance", options)?;
        Ok(Response::new(200, instance(instance_id, state)))
    }

    async fn update_instance(
        &self,
        instance_id: &str,
        _details: &UpdateInstanceDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>> {
        self.mutate("update_instance", options, instance(instance_id, "RUNNING"))
    }

    async fn instance_action(
        &self,
        instance_id: &str,
        _action: InstanceAction,
        options: &RequestOptions,
    ) -> ApiResult<Response<Instance>> {
        self.mutate("instance_action", options, instance(instance_id, "STOPPING"))
    }

    async fn terminate_instance(
        &self,
        _instance_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>> {
        self.mutate("terminate_instance", options, ())
    }

    async fn attach_vnic(
        &self,
        _details: &AttachVnicDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<VnicAttachment>> {
        self.mutate("attach_vnic", options, vnic_attachment("vnic-att-1", "ATTACHING"))
    }

    async fn get_vnic_attachment(
        &self,
        vnic_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<VnicAttachment>> {
        let state = self.next_state("get_vnic_attachment", options)?;
        Ok(Response::new(200, vnic_attachment(vnic_attachment_id, state)))
    }

    async fn detach_vnic(
        &self,
        _vnic_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>> {
        self.mutate("detach_vnic", options, ())
    }

    async fn attach_volume(
        &self,
        _details: &AttachVolumeDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<VolumeAttachment>> {
        self.mutate("attach_volume", options, volume_attachment("vol-att-1", "ATTACHING"))
    }

    async fn get_volume_attachment(
        &self,
        volume_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<VolumeAttachment>> {
        let state = self.next_state("get_volume_attachment", options)?;
        Ok(Response::new(200, volume_attachment(volume_attachment_id, state)))
    }

    async fn detach_volume(
        &self,
        _volume_attachment_id: &str,
        options: &RequestOptions,
    ) -> ApiResult<Response<()>> {
        self.mutate("detach_volume", options, ())
    }

    async fn create_image(
        &self,
        _details: &CreateImageDetails,
        options: &RequestOptions,
    ) -> ApiResult<Response<Image>> {
        self.mutate("create_image", options, image("image-1", "PROVISIONING"))
    }

    async fn get_image(&self, image_id: &str, options: &RequestOptions) -> ApiResult<Response<Image>> {
        let state = self.next_state("get_image", options)?;
        Ok(Response::new(200, image(image_id, state)))
    }

    async fn delete_image(&self, _image_id: &str, options: &RequestOptions) -> ApiResult<Response<()>> {
        self.mutate("delete_image", options, ())
    }
}

fn compute_operations(
    fake: FakeCompute,
) -> (Arc<FakeCompute>, ComputeClientCompositeOperations<FakeCompute>) {
    let client = Arc::new(fake);
    let operation = CompositeOperation::new(WaiterConfig::default().with_jitter(0.0));
    let composite = ComputeClientCompositeOperations::with_operation(Arc::clone(&client), operation);
    (client, composite)
}

fn launch_details() -> LaunchInstanceDetails {
    LaunchInstanceDetails {
        compartment_id: "ocid1.compartment.oc1..aaaa".to_string(),
        availability_domain: "Uocm:PHX-AD-1".to_string(),
        shape: "VM.Standard.E4.Flex".to_string(),
        display_name: Some("web-1".to_string()),
        subnet_id: None,
        image_id: None,
    }
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_launch_instance_waits_until_running() {
    let (client, composite) = compute_operations(FakeCompute::with_states(&[
        "PROVISIONING",
        "PROVISIONING",
        "RUNNING",
    ]));
    let start = Instant::now();

    let outcome = composite
        .launch_instance_and_wait_for_state(
            &launch_details(),
            &["RUNNING"],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap();

    let instance = &outcome.reached().unwrap().data;
    assert_eq!(instance.id, "inst-1");
    assert_eq!(instance.lifecycle_state.as_str(), "RUNNING");
    assert_eq!(
        client.calls(),
        ["launch_instance", "get_instance", "get_instance", "get_instance"]
    );
    // Backoff of 1s then 2s between the three polls.
    assert_eq!(start.elapsed(), Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_request_options_reach_every_call() {
    let (client, composite) = compute_operations(FakeCompute::with_states(&["STOPPING", "STOPPED"]));
    let options = RequestOptions::new()
        .with_request_id("req-42")
        .with_retry(RetryConfig::disabled());

    composite
        .instance_action_and_wait_for_state(
            "inst-1",
            InstanceAction::Stop,
            &["STOPPED"],
            &options,
            &WaiterOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        ["instance_action", "get_instance", "get_instance"]
    );
    assert!(client
        .request_ids()
        .iter()
        .all(|id| id.as_deref() == Some("req-42")));
}

#[rstest]
#[case::upper("RUNNING")]
#[case::lower("running")]
#[case::mixed("Running")]
#[tokio::test(start_paused = true)]
async fn test_wait_states_match_case_insensitively(#[case] wanted: &str) {
    let (_, composite) = compute_operations(FakeCompute::with_states(&["RUNNING"]));

    let outcome = composite
        .update_instance_and_wait_for_state(
            "inst-9",
            &UpdateInstanceDetails::default(),
            &[wanted],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.reached().unwrap().data.id, "inst-9");
}

#[tokio::test(start_paused = true)]
async fn test_validation_error_is_returned_unwrapped() {
    let err = ApiError::Validation("availability_domain is required".to_string());
    let (client, composite) =
        compute_operations(FakeCompute::with_states(&["RUNNING"]).failing_mutations(err.clone()));

    let result = composite
        .launch_instance_and_wait_for_state(
            &launch_details(),
            &["RUNNING"],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await;

    match result {
        Err(CompositeError::Operation(returned)) => assert_eq!(returned, err),
        other => panic!("expected the validation error, got {other:?}"),
    }
    assert_eq!(client.calls(), ["launch_instance"]);
}

#[tokio::test(start_paused = true)]
async fn test_empty_wait_states_skip_polling() {
    let (client, composite) = compute_operations(FakeCompute::with_states(&["ATTACHED"]));
    let details = AttachVolumeDetails {
        instance_id: "ocid1.instance.oc1..inst".to_string(),
        volume_id: "ocid1.volume.oc1..vol".to_string(),
        attachment_type: "paravirtualized".to_string(),
        display_name: None,
    };
    let no_states: [&str; 0] = [];

    let outcome = composite
        .attach_volume_and_wait_for_state(
            &details,
            &no_states,
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap();

    let OperationOutcome::Submitted(response) = outcome else {
        panic!("expected the attach response");
    };
    assert_eq!(response.data.id, "vol-att-1");
    assert_eq!(
        response.headers.opc_request_id.as_deref(),
        Some("attach_volume-response")
    );
    assert_eq!(client.calls(), ["attach_volume"]);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_terminate_treats_vanished_instance_as_success() {
    let (client, composite) = compute_operations(FakeCompute::new(vec![
        Ok("RUNNING"),
        Ok("TERMINATING"),
        Err(ApiError::not_found("instance not found")),
    ]));

    let outcome = composite
        .terminate_instance_and_wait_for_state(
            "inst-1",
            &["TERMINATED"],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap();

    assert!(outcome.is_gone());
    assert_eq!(
        client.calls(),
        ["get_instance", "terminate_instance", "get_instance", "get_instance"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_detach_of_missing_attachment_fails_before_detaching() {
    let (client, composite) = compute_operations(FakeCompute::new(vec![Err(ApiError::not_found(
        "vnic attachment not found",
    ))]));

    let err = composite
        .detach_vnic_and_wait_for_state(
            "vnic-att-404",
            &["DETACHED"],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(err.as_api_error().is_some_and(ApiError::is_not_found));
    assert_eq!(client.calls(), ["get_vnic_attachment"]);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_timeout_reports_the_action_response() {
    let (client, composite) = compute_operations(FakeCompute::with_states(&["STOPPING"]));
    let start = Instant::now();

    let err = composite
        .instance_action_and_wait_for_state(
            "inst-1",
            InstanceAction::Softstop,
            &["STOPPED"],
            &RequestOptions::new(),
            &WaiterOptions::new().max_interval_seconds(4).max_wait_seconds(10),
        )
        .await
        .unwrap_err();

    let failure = err.as_wait_failure().expect("wait failure");
    assert!(failure.is_timeout());
    assert_eq!(failure.operation(), "instance_action_and_wait_for_state");
    let action_response = &failure.partial_results()[0];
    assert_eq!(action_response.data.lifecycle_state.as_str(), "STOPPING");
    assert_eq!(
        action_response.headers.opc_request_id.as_deref(),
        Some("instance_action-response")
    );
    assert_eq!(start.elapsed(), Duration::from_secs(10));
    // Polls at 0, 1, 3, 7 and 10 seconds.
    assert_eq!(client.calls().len(), 1 + 5);
}

#[tokio::test(start_paused = true)]
async fn test_fatal_poll_error_stops_waiting() {
    let (client, composite) = compute_operations(FakeCompute::new(vec![
        Ok("PROVISIONING"),
        Err(ApiError::service(401, "NotAuthenticated", "signature expired")),
        Ok("AVAILABLE"),
    ]));
    let details = CreateImageDetails {
        compartment_id: "ocid1.compartment.oc1..aaaa".to_string(),
        instance_id: Some("inst-1".to_string()),
        display_name: None,
    };

    let err = composite
        .create_image_and_wait_for_state(
            &details,
            &["AVAILABLE"],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap_err();

    let failure = err.as_wait_failure().unwrap();
    assert!(matches!(
        failure.wait_error(),
        WaitError::Poll(ApiError::Service { status: 401, .. })
    ));
    assert_eq!(failure.partial_results()[0].data.id, "image-1");
    assert_eq!(client.calls(), ["create_image", "get_image", "get_image"]);
}

#[tokio::test(start_paused = true)]
async fn test_transient_poll_errors_are_retried() {
    let (client, composite) = compute_operations(FakeCompute::new(vec![
        Ok("DETACHING"),
        Err(ApiError::service(429, "TooManyRequests", "slow down")),
        Err(ApiError::Network("connection reset by peer".to_string())),
        Ok("DETACHED"),
    ]));

    let outcome = composite
        .detach_volume_and_wait_for_state(
            "vol-att-1",
            &["DETACHED"],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome.reached().unwrap().data.lifecycle_state.as_str(),
        "DETACHED"
    );
    assert_eq!(client.calls().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_delete_image_reaches_deleted_state() {
    let (client, composite) =
        compute_operations(FakeCompute::with_states(&["AVAILABLE", "DELETED"]));

    let outcome = composite
        .delete_image_and_wait_for_state(
            "image-1",
            &["DELETED"],
            &RequestOptions::new(),
            &WaiterOptions::default(),
        )
        .await
        .unwrap();

    assert!(outcome.reached().is_some());
    assert_eq!(client.calls(), ["get_image", "delete_image", "get_image"]);
}

#[tokio::test(start_paused = true)]
async fn test_cloned_clients_wait_concurrently() {
    let (client, composite) = compute_operations(FakeCompute::with_states(&["ATTACHED"]));
    let details = AttachVnicDetails {
        instance_id: "ocid1.instance.oc1..inst".to_string(),
        subnet_id: "ocid1.subnet.oc1..sub".to_string(),
        display_name: None,
    };

    let attaches = (0..4).map(|_| {
        let composite = composite.clone();
        let details = details.clone();
        async move {
            composite
                .attach_vnic_and_wait_for_state(
                    &details,
                    &["ATTACHED"],
                    &RequestOptions::new(),
                    &WaiterOptions::default(),
                )
                .await
        }
    });
    let results = join_all(attaches).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(client.calls().len(), 8);
}

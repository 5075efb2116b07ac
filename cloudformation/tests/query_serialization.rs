/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudformation::input::{
    CreateChangeSetInput, CreateStackInput, DeleteStackInput, ListStacksInput,
    UpdateStackSetInput,
};
use cloudformation::model::{
    Capability, OnFailure, Parameter, ResourceToImport, RollbackConfiguration, RollbackTrigger,
    StackSetOperationPreferences, StackStatus, Tag,
};
use cloudformation::Config;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};

fn body_of(request: &http::Request<smithy_http::body::SdkBody>) -> &str {
    std::str::from_utf8(request.body().bytes().expect("body is in memory")).expect("utf-8 body")
}

#[test]
fn operation_request_shape() {
    let config = Config::builder()
        .endpoint(http::Uri::from_static("https://cloudformation.us-east-1.amazonaws.com/"))
        .build();
    let op = ListStacksInput::builder()
        .build()
        .unwrap()
        .make_operation(&config)
        .expect("valid operation");
    let request = op.request();
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(
        request.uri(),
        &http::Uri::from_static("https://cloudformation.us-east-1.amazonaws.com/")
    );
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-www-form-urlencoded"),
            ("content-length", "36"),
        ],
    ));
    assert_eq!(body_of(request), "Action=ListStacks&Version=2010-05-15");
    let metadata = op.metadata().expect("metadata is set");
    assert_eq!(metadata.name(), "ListStacks");
    assert_eq!(metadata.service(), "cloudformation");
}

#[test]
fn without_an_endpoint_requests_target_the_root() {
    let op = ListStacksInput::builder()
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .expect("valid operation");
    assert_eq!(op.request().uri(), &http::Uri::from_static("/"));
}

#[test]
fn scalars_lists_and_nested_structures() {
    let input = CreateStackInput::builder()
        .stack_name("web")
        .template_body(r#"{"Resources":{}}"#)
        .parameters(
            Parameter::builder()
                .parameter_key("Env")
                .parameter_value("prod value")
                .build(),
        )
        .parameters(
            Parameter::builder()
                .parameter_key("Size")
                .use_previous_value(true)
                .build(),
        )
        .disable_rollback(false)
        .rollback_configuration(
            RollbackConfiguration::builder()
                .rollback_triggers(
                    RollbackTrigger::builder()
                        .arn("arn:aws:cloudwatch:us-east-1:123456789012:alarm:cpu")
                        .r#type("AWS::CloudWatch::Alarm")
                        .build(),
                )
                .monitoring_time_in_minutes(5)
                .build(),
        )
        .timeout_in_minutes(30)
        .capabilities(Capability::CapabilityIam)
        .capabilities(Capability::CapabilityAutoExpand)
        .on_failure(OnFailure::Delete)
        .tags(Tag::builder().key("team").value("infra").build())
        .build()
        .unwrap();
    let op = input
        .make_operation(&Config::builder().build())
        .expect("valid operation");
    let expected = "Action=CreateStack&Version=2010-05-15\
        &StackName=web\
        &TemplateBody=%7B%22Resources%22%3A%7B%7D%7D\
        &Parameters.member.1.ParameterKey=Env\
        &Parameters.member.1.ParameterValue=prod%20value\
        &Parameters.member.2.ParameterKey=Size\
        &Parameters.member.2.UsePreviousValue=true\
        &DisableRollback=false\
        &RollbackConfiguration.RollbackTriggers.member.1.Arn=arn%3Aaws%3Acloudwatch%3Aus-east-1%3A123456789012%3Aalarm%3Acpu\
        &RollbackConfiguration.RollbackTriggers.member.1.Type=AWS%3A%3ACloudWatch%3A%3AAlarm\
        &RollbackConfiguration.MonitoringTimeInMinutes=5\
        &TimeoutInMinutes=30\
        &Capabilities.member.1=CAPABILITY_IAM\
        &Capabilities.member.2=CAPABILITY_AUTO_EXPAND\
        &OnFailure=DELETE\
        &Tags.member.1.Key=team\
        &Tags.member.1.Value=infra";
    assert_eq!(body_of(op.request()), expected);
    assert_ok(validate_body(
        op.request().body().bytes().unwrap(),
        expected,
        MediaType::UrlEncodedForm,
    ));
}

#[test]
fn empty_lists_are_written_absent_lists_are_not() {
    let op = DeleteStackInput::builder()
        .stack_name("web")
        .set_retain_resources(Some(vec![]))
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .expect("valid operation");
    assert_eq!(
        body_of(op.request()),
        "Action=DeleteStack&Version=2010-05-15&StackName=web&RetainResources="
    );

    let op = DeleteStackInput::builder()
        .stack_name("web")
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .expect("valid operation");
    assert_eq!(
        body_of(op.request()),
        "Action=DeleteStack&Version=2010-05-15&StackName=web"
    );
}

#[test]
fn enum_lists_use_wire_tokens() {
    let op = ListStacksInput::builder()
        .stack_status_filter(StackStatus::CreateComplete)
        .stack_status_filter(StackStatus::from("UPDATE_COMPLETE"))
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .expect("valid operation");
    assert_eq!(
        body_of(op.request()),
        "Action=ListStacks&Version=2010-05-15\
         &StackStatusFilter.member.1=CREATE_COMPLETE\
         &StackStatusFilter.member.2=UPDATE_COMPLETE"
    );
}

#[test]
fn maps_are_written_as_sorted_entries() {
    let op = CreateChangeSetInput::builder()
        .stack_name("web")
        .change_set_name("import-bucket")
        .change_set_type(cloudformation::model::ChangeSetType::Import)
        .resources_to_import(
            ResourceToImport::builder()
                .resource_type("AWS::S3::Bucket")
                .logical_resource_id("Bucket")
                .resource_identifier("BucketName", "my-bucket")
                .resource_identifier("Arn", "arn")
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .expect("valid operation");
    let body = body_of(op.request());
    assert!(body.contains(
        "&ResourcesToImport.member.1.ResourceIdentifier.entry.1.key=Arn\
         &ResourcesToImport.member.1.ResourceIdentifier.entry.1.value=arn\
         &ResourcesToImport.member.1.ResourceIdentifier.entry.2.key=BucketName\
         &ResourcesToImport.member.1.ResourceIdentifier.entry.2.value=my-bucket"
    ), "{}", body);
    assert!(body.contains("&ChangeSetType=IMPORT"), "{}", body);
}

#[test]
fn nested_integer_preferences() {
    let op = UpdateStackSetInput::builder()
        .stack_set_name("my-set")
        .use_previous_template(true)
        .operation_preferences(
            StackSetOperationPreferences::builder()
                .region_order("us-east-1")
                .region_order("eu-west-1")
                .failure_tolerance_count(0)
                .max_concurrent_percentage(50)
                .build(),
        )
        .operation_id("op-1")
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .expect("valid operation");
    assert_ok(validate_body(
        op.request().body().bytes().unwrap(),
        "Action=UpdateStackSet&Version=2010-05-15\
         &StackSetName=my-set\
         &UsePreviousTemplate=true\
         &OperationPreferences.RegionOrder.member.1=us-east-1\
         &OperationPreferences.RegionOrder.member.2=eu-west-1\
         &OperationPreferences.FailureToleranceCount=0\
         &OperationPreferences.MaxConcurrentPercentage=50\
         &OperationId=op-1",
        MediaType::UrlEncodedForm,
    ));
}

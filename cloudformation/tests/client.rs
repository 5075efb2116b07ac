/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudformation::error::{DescribeChangeSetErrorKind, DescribeStacksErrorKind};
use cloudformation::model::{Capability, OperationStatus, StackDriftStatus, StackStatus};
use cloudformation::{Client, Config, SdkError};
use smithy_client::test_connection::TestConnection;
use smithy_http::body::SdkBody;

const ENDPOINT: &str = "https://cloudformation.us-east-1.amazonaws.com/";

fn expected_request(body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(ENDPOINT)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder()
        .status(status)
        .header("content-type", "text/xml")
        .body(body)
        .unwrap()
}

fn client(conn: TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
    let conf = Config::builder()
        .endpoint(http::Uri::from_static(ENDPOINT))
        .build();
    Client::from_conf_conn(conf, conn)
}

const DESCRIBE_STACKS_RESPONSE: &str = r#"<DescribeStacksResponse xmlns="http://cloudformation.amazonaws.com/doc/2010-05-15/">
  <DescribeStacksResult>
    <Stacks>
      <member>
        <StackId>arn:aws:cloudformation:us-east-1:123456789012:stack/web/1a2b</StackId>
        <StackName>web</StackName>
        <CreationTime>2019-12-16T23:48:18.000Z</CreationTime>
        <StackStatus>CREATE_COMPLETE</StackStatus>
        <DisableRollback>false</DisableRollback>
        <TimeoutInMinutes>30</TimeoutInMinutes>
        <Capabilities>
          <member>CAPABILITY_IAM</member>
          <member>CAPABILITY_SHINY_NEW</member>
        </Capabilities>
        <Outputs>
          <member>
            <OutputKey>Url</OutputKey>
            <OutputValue>https://example.com</OutputValue>
          </member>
        </Outputs>
        <Tags>
          <member><Key>team</Key><Value>infra</Value></member>
        </Tags>
        <SomethingAddedLater><Nested>ignored</Nested></SomethingAddedLater>
      </member>
    </Stacks>
  </DescribeStacksResult>
  <ResponseMetadata>
    <RequestId>b9b4b068-3a41-11e5-94eb-example</RequestId>
  </ResponseMetadata>
</DescribeStacksResponse>"#;

#[tokio::test]
async fn describe_stacks_round_trip() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let conn = TestConnection::new(vec![(
        expected_request("Action=DescribeStacks&Version=2010-05-15&StackName=web"),
        response(200, DESCRIBE_STACKS_RESPONSE),
    )]);
    let output = client(conn.clone())
        .describe_stacks()
        .stack_name("web")
        .send()
        .await
        .expect("valid response");
    conn.assert_requests_match(&[]);

    assert_eq!(output.next_token, None);
    let stacks = output.stacks.expect("stacks were returned");
    assert_eq!(stacks.len(), 1);
    let stack = &stacks[0];
    assert_eq!(stack.stack_name.as_deref(), Some("web"));
    assert_eq!(stack.stack_status, Some(StackStatus::CreateComplete));
    assert_eq!(stack.disable_rollback, Some(false));
    assert_eq!(stack.timeout_in_minutes, Some(30));
    assert_eq!(
        stack.creation_time.as_ref().map(|t| t.epoch_seconds()),
        Some(1576540098)
    );
    assert_eq!(
        stack.capabilities,
        Some(vec![
            Capability::CapabilityIam,
            Capability::Unknown("CAPABILITY_SHINY_NEW".to_string())
        ])
    );
    let outputs = stack.outputs.as_ref().expect("outputs");
    assert_eq!(outputs[0].output_key.as_deref(), Some("Url"));
    assert_eq!(outputs[0].output_value.as_deref(), Some("https://example.com"));
    let tags = stack.tags.as_ref().expect("tags");
    assert_eq!(tags[0].key.as_deref(), Some("team"));
    assert_eq!(tags[0].value.as_deref(), Some("infra"));
    assert_eq!(stack.deletion_time, None);
}

#[tokio::test]
async fn drift_status_unknown_and_split_text_decode() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=DescribeStacks&Version=2010-05-15"),
        response(
            200,
            "<DescribeStacksResponse><DescribeStacksResult><Stacks><member>\
             <StackName>we<!-- split -->b</StackName>\
             <DriftInformation><StackDriftStatus>UNKNOWN</StackDriftStatus></DriftInformation>\
             </member></Stacks></DescribeStacksResult></DescribeStacksResponse>",
        ),
    )]);
    let output = client(conn)
        .describe_stacks()
        .send()
        .await
        .expect("valid response");
    let stacks = output.stacks.expect("stacks");
    let stack = &stacks[0];
    assert_eq!(stack.stack_name.as_deref(), Some("web"));
    let drift = stack
        .drift_information
        .as_ref()
        .and_then(|info| info.stack_drift_status.as_ref());
    assert_eq!(drift, Some(&StackDriftStatus::UnknownValue));
    assert_eq!(drift.map(|status| status.as_str()), Some("UNKNOWN"));
}

#[tokio::test]
async fn empty_result_element_produces_empty_output() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=DescribeStacks&Version=2010-05-15"),
        response(
            200,
            "<DescribeStacksResponse><ResponseMetadata><RequestId>r</RequestId></ResponseMetadata></DescribeStacksResponse>",
        ),
    )]);
    let output = client(conn)
        .describe_stacks()
        .send()
        .await
        .expect("valid response");
    assert_eq!(output.stacks, None);
    assert_eq!(output.next_token, None);
}

#[tokio::test]
async fn wrong_root_element_is_a_response_error() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=DescribeStacks&Version=2010-05-15"),
        response(200, "<ListStacksResponse></ListStacksResponse>"),
    )]);
    let err = client(conn)
        .describe_stacks()
        .send()
        .await
        .expect_err("root element does not match");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert!(matches!(err.kind, DescribeStacksErrorKind::Unhandled(_)));
            assert_eq!(raw.status().as_u16(), 200);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

const CHANGE_SET_NOT_FOUND: &str = r#"<ErrorResponse xmlns="http://cloudformation.amazonaws.com/doc/2010-05-15/">
  <Error>
    <Type>Sender</Type>
    <Code>ChangeSetNotFound</Code>
    <Message>ChangeSet [missing] does not exist</Message>
  </Error>
  <RequestId>5ccc7dcd-744c-11e5-be70-example</RequestId>
</ErrorResponse>"#;

#[tokio::test]
async fn modeled_errors_are_typed() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=DescribeChangeSet&Version=2010-05-15&ChangeSetName=missing"),
        response(400, CHANGE_SET_NOT_FOUND),
    )]);
    let err = client(conn)
        .describe_change_set()
        .change_set_name("missing")
        .send()
        .await
        .expect_err("service returned an error");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("unexpected error: {:?}", other),
    };
    assert!(err.is_change_set_not_found_exception());
    assert_eq!(err.code(), Some("ChangeSetNotFound"));
    assert_eq!(err.message(), Some("ChangeSet [missing] does not exist"));
    assert_eq!(err.request_id(), Some("5ccc7dcd-744c-11e5-be70-example"));
    match &err.kind {
        DescribeChangeSetErrorKind::ChangeSetNotFoundException(inner) => {
            assert_eq!(inner.message(), Some("ChangeSet [missing] does not exist"));
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "ChangeSetNotFoundException: ChangeSet [missing] does not exist"
    );
}

#[tokio::test]
async fn unknown_error_codes_are_unhandled() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=DescribeChangeSet&Version=2010-05-15&ChangeSetName=cs"),
        response(
            400,
            "<ErrorResponse><Error><Code>Throttling</Code><Message>Rate exceeded</Message></Error><RequestId>abc</RequestId></ErrorResponse>",
        ),
    )]);
    let err = client(conn)
        .describe_change_set()
        .change_set_name("cs")
        .send()
        .await
        .expect_err("service returned an error");
    let err = err.service_error().expect("a service error");
    assert!(!err.is_change_set_not_found_exception());
    assert!(matches!(err.kind, DescribeChangeSetErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("Throttling"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("abc"));
}

#[tokio::test]
async fn unparseable_error_bodies_are_unhandled() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=DescribeChangeSet&Version=2010-05-15&ChangeSetName=cs"),
        response(503, "Service Unavailable"),
    )]);
    let err = client(conn)
        .describe_change_set()
        .change_set_name("cs")
        .send()
        .await
        .expect_err("service returned an error");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert!(matches!(err.kind, DescribeChangeSetErrorKind::Unhandled(_)));
            assert_eq!(err.code(), None);
            assert_eq!(raw.status().as_u16(), 503);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn error_codes_map_onto_differently_named_exceptions() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "Action=RecordHandlerProgress&Version=2010-05-15&BearerToken=token&OperationStatus=SUCCESS",
        ),
        response(
            400,
            "<ErrorResponse><Error><Code>ConditionalCheckFailed</Code><Message>stale</Message></Error><RequestId>r-1</RequestId></ErrorResponse>",
        ),
    )]);
    let err = client(conn)
        .record_handler_progress()
        .bearer_token("token")
        .operation_status(OperationStatus::Success)
        .send()
        .await
        .expect_err("service returned an error");
    let err: cloudformation::Error = err.into();
    match err {
        cloudformation::Error::OperationStatusCheckFailedException(inner) => {
            assert_eq!(inner.message(), Some("stale"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn top_level_error_collapses_non_service_failures() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let err = client(conn)
        .describe_stacks()
        .send()
        .await
        .expect_err("no responses are loaded");
    assert!(matches!(err, SdkError::DispatchFailure(_)));
    let err: cloudformation::Error = err.into();
    assert!(matches!(err, cloudformation::Error::Unhandled(_)));
}

#[tokio::test]
async fn invalid_input_is_a_construction_failure() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let err = client(conn.clone())
        .describe_change_set()
        .send()
        .await
        .expect_err("ChangeSetName is required");
    match err {
        SdkError::ConstructionFailure(err) => {
            assert!(
                err.to_string().contains("DescribeChangeSetInput.ChangeSetName"),
                "{}",
                err
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn clients_share_their_connection() {
    let conn = TestConnection::new(vec![
        (
            expected_request("Action=DescribeStacks&Version=2010-05-15"),
            response(200, "<DescribeStacksResponse/>"),
        ),
        (
            expected_request("Action=DescribeStacks&Version=2010-05-15&StackName=web"),
            response(200, "<DescribeStacksResponse/>"),
        ),
    ]);
    let first = client(conn.clone());
    let second = first.clone();
    first.describe_stacks().send().await.expect("first response");
    second
        .describe_stacks()
        .stack_name("web")
        .send()
        .await
        .expect("second response");
    conn.assert_requests_match(&[]);
    assert_eq!(first.conf().endpoint(), Some(&http::Uri::from_static(ENDPOINT)));
}

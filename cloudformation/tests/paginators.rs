/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudformation::{Client, Config, SdkError};
use smithy_client::test_connection::TestConnection;
use smithy_http::body::SdkBody;
use tokio_stream::StreamExt;

fn expected_request(body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri("/")
        .body(SdkBody::from(body))
        .unwrap()
}

fn page(body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(200).body(body).unwrap()
}

fn client(conn: TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
    Client::from_conf_conn(Config::builder().build(), conn)
}

const FIRST_PAGE: &str = "<ListStacksResponse><ListStacksResult>\
    <StackSummaries>\
    <member><StackName>alpha</StackName><StackStatus>CREATE_COMPLETE</StackStatus></member>\
    <member><StackName>beta</StackName><StackStatus>UPDATE_COMPLETE</StackStatus></member>\
    </StackSummaries>\
    <NextToken>page-2</NextToken>\
    </ListStacksResult></ListStacksResponse>";

const LAST_PAGE: &str = "<ListStacksResponse><ListStacksResult>\
    <StackSummaries>\
    <member><StackName>gamma</StackName><StackStatus>DELETE_COMPLETE</StackStatus></member>\
    </StackSummaries>\
    </ListStacksResult></ListStacksResponse>";

#[tokio::test]
async fn pages_follow_the_next_token() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let conn = TestConnection::new(vec![
        (
            expected_request("Action=ListStacks&Version=2010-05-15"),
            page(FIRST_PAGE),
        ),
        (
            expected_request("Action=ListStacks&Version=2010-05-15&NextToken=page-2"),
            page(LAST_PAGE),
        ),
    ]);
    let pages = client(conn.clone())
        .list_stacks()
        .paginate()
        .send()
        .collect::<Vec<_>>()
        .await;
    assert_eq!(pages.len(), 2);
    let first = pages[0].as_ref().expect("first page");
    assert_eq!(first.next_token.as_deref(), Some("page-2"));
    assert_eq!(first.stack_summaries.as_ref().map(Vec::len), Some(2));
    let last = pages[1].as_ref().expect("last page");
    assert_eq!(last.next_token, None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn items_flatten_every_page() {
    let conn = TestConnection::new(vec![
        (
            expected_request("Action=ListStacks&Version=2010-05-15"),
            page(FIRST_PAGE),
        ),
        (
            expected_request("Action=ListStacks&Version=2010-05-15&NextToken=page-2"),
            page(LAST_PAGE),
        ),
    ]);
    let names = client(conn)
        .list_stacks()
        .paginate()
        .items()
        .map(|summary| summary.expect("valid page").stack_name.unwrap_or_default())
        .collect::<Vec<_>>()
        .await;
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn a_repeated_token_ends_pagination() {
    let conn = TestConnection::new(vec![
        (
            expected_request("Action=ListStacks&Version=2010-05-15&NextToken=stuck"),
            page("<ListStacksResponse><ListStacksResult><NextToken>stuck</NextToken></ListStacksResult></ListStacksResponse>"),
        ),
    ]);
    let pages = client(conn.clone())
        .list_stacks()
        .next_token("stuck")
        .paginate()
        .send()
        .collect::<Vec<_>>()
        .await;
    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_ok());
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn an_empty_token_ends_pagination() {
    let conn = TestConnection::new(vec![(
        expected_request("Action=ListStacks&Version=2010-05-15"),
        page("<ListStacksResponse><ListStacksResult><NextToken></NextToken></ListStacksResult></ListStacksResponse>"),
    )]);
    let pages = client(conn.clone())
        .list_stacks()
        .paginate()
        .send()
        .collect::<Vec<_>>()
        .await;
    assert_eq!(pages.len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn errors_end_the_stream() {
    let conn = TestConnection::new(vec![
        (
            expected_request("Action=ListStacks&Version=2010-05-15"),
            page(FIRST_PAGE),
        ),
        (
            expected_request("Action=ListStacks&Version=2010-05-15&NextToken=page-2"),
            http::Response::builder()
                .status(400)
                .body("<ErrorResponse><Error><Code>Throttling</Code></Error><RequestId>r</RequestId></ErrorResponse>")
                .unwrap(),
        ),
    ]);
    let mut items = client(conn)
        .list_stacks()
        .paginate()
        .items();
    assert!(items.next().await.expect("alpha").is_ok());
    assert!(items.next().await.expect("beta").is_ok());
    match items.next().await.expect("the error is yielded") {
        Err(SdkError::ServiceError { err, .. }) => assert_eq!(err.code(), Some("Throttling")),
        other => panic!("unexpected item: {:?}", other),
    }
    assert!(items.next().await.is_none());
}

#[tokio::test]
async fn invalid_input_yields_a_single_construction_failure() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let pages = client(conn.clone())
        .describe_stack_resource_drifts()
        .paginate()
        .send()
        .collect::<Vec<_>>()
        .await;
    assert_eq!(pages.len(), 1);
    assert!(matches!(pages[0], Err(SdkError::ConstructionFailure(_))));
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn page_size_sets_max_results() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "Action=DescribeStackResourceDrifts&Version=2010-05-15&StackName=web&MaxResults=10",
        ),
        page("<DescribeStackResourceDriftsResponse><DescribeStackResourceDriftsResult>\
              <StackResourceDrifts><member><LogicalResourceId>Bucket</LogicalResourceId></member></StackResourceDrifts>\
              </DescribeStackResourceDriftsResult></DescribeStackResourceDriftsResponse>"),
    )]);
    let drifts = client(conn.clone())
        .describe_stack_resource_drifts()
        .stack_name("web")
        .paginate()
        .page_size(10)
        .items()
        .collect::<Vec<_>>()
        .await;
    assert_eq!(drifts.len(), 1);
    assert_eq!(
        drifts[0].as_ref().expect("valid item").logical_resource_id.as_deref(),
        Some("Bucket")
    );
    conn.assert_requests_match(&[]);
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudformation::idempotency_token::MakeIdempotencyToken;
use cloudformation::input::{CreateStackInstancesInput, CreateStackSetInput};
use cloudformation::Config;
use std::sync::atomic::{AtomicUsize, Ordering};

fn body(request: &http::Request<smithy_http::body::SdkBody>) -> String {
    String::from_utf8(request.body().bytes().expect("in-memory body").to_vec()).unwrap()
}

fn stack_instances() -> CreateStackInstancesInput {
    CreateStackInstancesInput::builder()
        .stack_set_name("my-set")
        .accounts("123456789012")
        .regions("us-east-1")
        .build()
        .unwrap()
}

#[test]
fn absent_tokens_are_filled_from_the_config() {
    let config = Config::builder().make_token("00000000-0000-4000-8000-000000000000").build();
    let op = stack_instances().make_operation(&config).expect("valid input");
    assert_eq!(
        body(op.request()),
        "Action=CreateStackInstances&Version=2010-05-15\
         &StackSetName=my-set\
         &Accounts.member.1=123456789012\
         &Regions.member.1=us-east-1\
         &OperationId=00000000-0000-4000-8000-000000000000"
    );
}

#[test]
fn explicit_tokens_are_kept() {
    let config = Config::builder().make_token("generated").build();
    let input = CreateStackSetInput::builder()
        .stack_set_name("my-set")
        .client_request_token("caller-supplied")
        .build()
        .unwrap();
    let op = input.make_operation(&config).expect("valid input");
    assert!(body(op.request()).ends_with("&ClientRequestToken=caller-supplied"));
    // the input itself is not modified
    assert_eq!(input.client_request_token.as_deref(), Some("caller-supplied"));
}

#[test]
fn default_provider_generates_v4_uuids() {
    let op = stack_instances()
        .make_operation(&Config::builder().build())
        .expect("valid input");
    let body = body(op.request());
    let token = body
        .rsplit("&OperationId=")
        .next()
        .expect("operation id is present");
    let uuid = regex::Regex::new(
        "^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
    )
    .unwrap();
    assert!(uuid.is_match(token), "{}", token);
}

struct Counting(AtomicUsize);

impl MakeIdempotencyToken for Counting {
    fn make_idempotency_token(&self) -> String {
        format!("token-{}", self.0.fetch_add(1, Ordering::SeqCst))
    }
}

#[test]
fn each_operation_asks_for_a_fresh_token() {
    let config = Config::builder()
        .make_token(Counting(AtomicUsize::new(0)))
        .build();
    let first = stack_instances().make_operation(&config).unwrap();
    let second = stack_instances().make_operation(&config).unwrap();
    assert!(body(first.request()).ends_with("&OperationId=token-0"));
    assert!(body(second.request()).ends_with("&OperationId=token-1"));
}

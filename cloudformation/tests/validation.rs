/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudformation::input::{
    CreateChangeSetInput, CreateStackInput, CreateStackSetInput, DescribeChangeSetInput,
    DescribeStackResourceDriftsInput, ListStacksInput,
};
use cloudformation::model::{ResourceToImport, Tag};
use cloudformation::Config;
use smithy_http::operation::BuildError;

fn config() -> Config {
    Config::builder().make_token("token").build()
}

fn invalid_field(err: BuildError) -> (&'static str, String) {
    match err {
        BuildError::InvalidField { field, details } => (field, details),
        other => panic!("expected an invalid field, got {:?}", other),
    }
}

#[test]
fn missing_required_members_are_rejected() {
    let err = DescribeChangeSetInput::builder()
        .stack_name("web")
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("ChangeSetName is required");
    match err {
        BuildError::MissingField { field, .. } => {
            assert_eq!(field, "DescribeChangeSetInput.ChangeSetName")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn string_length_bounds() {
    let err = ListStacksInput::builder()
        .next_token("")
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("NextToken must not be empty");
    let (field, details) = invalid_field(err);
    assert_eq!(field, "ListStacksInput.NextToken");
    assert_eq!(details, "length 0 is outside of the range 1..=1024");

    let token = "a".repeat(1024);
    assert!(ListStacksInput::builder()
        .next_token(token)
        .build()
        .unwrap()
        .make_operation(&config())
        .is_ok());
}

#[test]
fn integer_ranges() {
    let input = |max_results| {
        DescribeStackResourceDriftsInput::builder()
            .stack_name("web")
            .max_results(max_results)
            .build()
            .unwrap()
    };
    assert!(input(1).make_operation(&config()).is_ok());
    assert!(input(100).make_operation(&config()).is_ok());
    let (field, _) = invalid_field(input(0).make_operation(&config()).unwrap_err());
    assert_eq!(field, "DescribeStackResourceDriftsInput.MaxResults");
    assert!(input(101).make_operation(&config()).is_err());

    let err = CreateStackInput::builder()
        .stack_name("web")
        .timeout_in_minutes(0)
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("timeouts start at one minute");
    assert_eq!(invalid_field(err).0, "CreateStackInput.TimeoutInMinutes");
}

#[test]
fn patterns_must_match_the_whole_value() {
    let err = CreateChangeSetInput::builder()
        .stack_name("web")
        .change_set_name("not a valid name")
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("spaces are not allowed");
    let (field, details) = invalid_field(err);
    assert_eq!(field, "CreateChangeSetInput.ChangeSetName");
    assert!(details.contains("not a valid name"), "{}", details);
}

#[test]
fn nested_structures_are_validated() {
    let err = CreateStackSetInput::builder()
        .stack_set_name("my-set")
        .tags(Tag::builder().key("team").build())
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("tags need a value");
    match err {
        BuildError::MissingField { field, .. } => assert_eq!(field, "Tag.Value"),
        other => panic!("unexpected error: {:?}", other),
    }

    let err = CreateChangeSetInput::builder()
        .stack_name("web")
        .change_set_name("import")
        .resources_to_import(
            ResourceToImport::builder()
                .resource_type("AWS::S3::Bucket")
                .logical_resource_id("Bucket")
                .set_resource_identifier(Some(Default::default()))
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("identifiers need at least one entry");
    assert_eq!(
        invalid_field(err).0,
        "ResourceToImport.ResourceIdentifier"
    );
}

#[test]
fn list_lengths() {
    let mut builder = CreateStackSetInput::builder().stack_set_name("my-set");
    for idx in 0..51 {
        builder = builder.tags(
            Tag::builder()
                .key(format!("key-{}", idx))
                .value("v")
                .build(),
        );
    }
    let err = builder
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("at most 50 tags");
    let (field, details) = invalid_field(err);
    assert_eq!(field, "CreateStackSetInput.Tags");
    assert!(details.starts_with("number of items 51"), "{}", details);
}

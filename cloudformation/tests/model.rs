/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudformation::model::{
    Capability, ChangeSetStatus, ChangeSetSummary, Parameter, ResourceToImport, Stack,
    StackDriftInformation, StackDriftStatus, StackStatus, Tag,
};
use smithy_types::Instant;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn display_omits_absent_members() {
    let summary = ChangeSetSummary::builder()
        .stack_name("s1")
        .status(ChangeSetStatus::CreateComplete)
        .build();
    let rendered = summary.to_string();
    assert!(rendered.contains("StackName: s1"), "{}", rendered);
    assert!(rendered.contains("Status: CREATE_COMPLETE"), "{}", rendered);
    assert!(!rendered.contains("ChangeSetId"), "{}", rendered);
    assert_eq!(rendered, "{StackName: s1, Status: CREATE_COMPLETE}");
    assert_eq!(ChangeSetSummary::builder().build().to_string(), "{}");
}

#[test]
fn display_renders_nested_values() {
    let stack = Stack::builder()
        .stack_name("web")
        .creation_time(Instant::from_epoch_seconds(1576540098))
        .capabilities(Capability::CapabilityIam)
        .tags(Tag::builder().key("team").value("infra").build())
        .build();
    assert_eq!(
        stack.to_string(),
        "{StackName: web, CreationTime: 2019-12-16T23:48:18Z, Capabilities: [CAPABILITY_IAM], Tags: [{Key: team, Value: infra}]}"
    );
}

#[test]
fn display_sorts_map_entries() {
    let resource = ResourceToImport::builder()
        .resource_type("AWS::S3::Bucket")
        .resource_identifier("Name", "bucket")
        .resource_identifier("Arn", "arn:aws:s3:::bucket")
        .build();
    assert_eq!(
        resource.to_string(),
        "{ResourceType: AWS::S3::Bucket, ResourceIdentifier: {Arn=arn:aws:s3:::bucket, Name=bucket}}"
    );
}

#[test]
fn builder_setters_store_values() {
    let param = Parameter::builder()
        .parameter_key("Env")
        .parameter_value("prod")
        .use_previous_value(false)
        .build();
    assert_eq!(param.parameter_key.as_deref(), Some("Env"));
    assert_eq!(param.parameter_value.as_deref(), Some("prod"));
    assert_eq!(param.use_previous_value, Some(false));
    assert_eq!(param.resolved_value, None);
}

#[test]
fn list_setters_append_and_replace() {
    let stack = Stack::builder()
        .notification_arns("arn:1")
        .notification_arns("arn:2")
        .build();
    assert_eq!(
        stack.notification_arns,
        Some(vec!["arn:1".to_string(), "arn:2".to_string()])
    );

    let stack = Stack::builder()
        .notification_arns("arn:1")
        .set_notification_arns(Some(vec!["arn:3".to_string()]))
        .notification_arns("arn:4")
        .build();
    assert_eq!(
        stack.notification_arns,
        Some(vec!["arn:3".to_string(), "arn:4".to_string()])
    );

    let stack = Stack::builder()
        .notification_arns("arn:1")
        .set_notification_arns(None)
        .build();
    assert_eq!(stack.notification_arns, None);
}

#[test]
fn enum_members_accept_variants_and_raw_strings() {
    let typed = Stack::builder().stack_status(StackStatus::CreateComplete).build();
    let raw = Stack::builder()
        .stack_status(StackStatus::from("CREATE_COMPLETE"))
        .build();
    assert_eq!(typed, raw);
    assert_eq!(
        typed.stack_status.as_ref().map(|status| status.as_str()),
        Some("CREATE_COMPLETE")
    );

    let future = StackStatus::from("IMPORT_DRIFTING");
    assert_eq!(future, StackStatus::Unknown("IMPORT_DRIFTING".to_string()));
    assert_eq!(future.as_str(), "IMPORT_DRIFTING");
    assert!(StackStatus::values().contains(&"ROLLBACK_COMPLETE"));
    assert_eq!("CAPABILITY_AUTO_EXPAND".parse::<Capability>(), Ok(Capability::CapabilityAutoExpand));
}

#[test]
fn an_unknown_wire_token_is_a_modeled_value() {
    let status = StackDriftStatus::from("UNKNOWN");
    assert_eq!(status, StackDriftStatus::UnknownValue);
    assert!(!matches!(status, StackDriftStatus::Unknown(_)));
    assert_eq!(status.as_str(), "UNKNOWN");
    assert_eq!("UNKNOWN".parse::<StackDriftStatus>(), Ok(StackDriftStatus::UnknownValue));
    assert!(StackDriftStatus::values().contains(&"UNKNOWN"));

    let future = StackDriftStatus::from("PARTIALLY_DRIFTED");
    assert_eq!(future, StackDriftStatus::Unknown("PARTIALLY_DRIFTED".to_string()));
    assert_ne!(future, status);

    let info = StackDriftInformation::builder()
        .stack_drift_status(StackDriftStatus::UnknownValue)
        .build();
    assert_eq!(info.to_string(), "{StackDriftStatus: UNKNOWN}");
}

#[test]
fn equal_records_hash_equally() {
    let a = Tag::builder().key("k").value("v").build();
    let b = Tag::builder().key("k").value("v").build();
    let c = Tag::builder().key("k").build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);

    let mut plain = Tag::default();
    plain.key = Some("k".to_string());
    plain.value = Some("v".to_string());
    assert_eq!(plain, a);
}

#[test]
fn records_are_send_and_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<Stack>();
    is_send_sync::<ResourceToImport>();
    is_send_sync::<cloudformation::input::CreateStackInput>();
    is_send_sync::<cloudformation::output::DescribeStacksOutput>();
}

#[cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]
#[test]
fn serde_uses_wire_tokens() {
    let summary = ChangeSetSummary::builder()
        .stack_name("s1")
        .status(ChangeSetStatus::CreateComplete)
        .creation_time(Instant::from_epoch_seconds(1576540098))
        .build();
    let json = serde_json::to_value(&summary).expect("serializable");
    assert_eq!(json["status"], "CREATE_COMPLETE");
    assert_eq!(json["creation_time"], "2019-12-16T23:48:18Z");
    let back: ChangeSetSummary = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, summary);
}

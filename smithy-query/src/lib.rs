/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol
//!
//! Requests are `application/x-www-form-urlencoded` bodies that start with
//! `Action=<action>&Version=<version>`. Nested members extend the key with `.`, list items
//! are numbered from 1 under `member`, and map entries under `entry` with `key`/`value` children.

use smithy_types::instant::Format;
use smithy_types::Instant;
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the top-level parameters of an AWS Query request body.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    /// Starts a request body for `action` at API `version`.
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Starts the top-level parameter `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {}
}

/// Writes a single value, or the children of a structure, under a key prefix.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Extends the key for a structure member: `Outer.Inner`.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    pub fn number(mut self, value: i64) {
        self.write_param_name();
        self.output.push_str(&value.to_string());
    }

    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(if value { "true" } else { "false" });
    }

    pub fn instant(self, instant: &Instant, format: Format) {
        self.string(&instant.fmt(format));
    }

    /// Starts a list. Non-flat lists number their items under `member` (or `member_override`).
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter {
            output: self.output,
            prefix: self.prefix,
            flat,
            member_override,
            next_index: 1,
        }
    }

    /// Starts a map. Non-flat maps number their entries under `entry`.
    pub fn start_map(self, flat: bool, key_name: &'a str, value_name: &'a str) -> QueryMapWriter<'a> {
        QueryMapWriter {
            output: self.output,
            prefix: self.prefix,
            flat,
            key_name,
            value_name,
            next_index: 1,
        }
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&encode(&self.prefix));
        self.output.push('=');
    }
}

pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!(
                "{}.{}.{}",
                self.prefix,
                self.member_override.unwrap_or("member"),
                self.next_index
            )
        };
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    /// An empty list is still written, with an empty value, so that the service can tell it
    /// apart from an absent one.
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    key_name: &'a str,
    value_name: &'a str,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    /// Writes the key of the next entry and returns a writer for its value.
    pub fn entry(&mut self, key: &str) -> QueryValueWriter<'_> {
        let entry_prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!("{}.entry.{}", self.prefix, self.next_index)
        };
        self.next_index += 1;
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", entry_prefix, self.key_name)),
        )
        .string(key);
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", entry_prefix, self.value_name)),
        )
    }

    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use proptest::prelude::*;
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn no_params() {
        let mut out = String::new();
        let writer = QueryWriter::new(&mut out, "ListStacks", "2010-05-15");
        writer.finish();
        assert_eq!("Action=ListStacks&Version=2010-05-15", out);
    }

    #[test]
    fn query_list_writer_empty_list() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateStack", "2010-05-15");
        writer.prefix("Capabilities").start_list(false, None).finish();
        writer.finish();
        assert_eq!(
            "Action=CreateStack&Version=2010-05-15&Capabilities=",
            out
        );
    }

    #[test]
    fn lists_number_from_one() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "ListStacks", "2010-05-15");
        let mut list = writer.prefix("StackStatusFilter").start_list(false, None);
        list.entry().string("CREATE_COMPLETE");
        list.entry().string("UPDATE_COMPLETE");
        list.finish();
        let mut flat = writer.prefix("Flat").start_list(true, None);
        flat.entry().number(7);
        flat.finish();
        writer.finish();
        assert_eq!(
            "Action=ListStacks&Version=2010-05-15\
             &StackStatusFilter.member.1=CREATE_COMPLETE\
             &StackStatusFilter.member.2=UPDATE_COMPLETE\
             &Flat.1=7",
            out
        );
    }

    #[test]
    fn nested_structures_in_lists() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateStack", "2010-05-15");
        let mut tags = writer.prefix("Tags").start_list(false, None);
        let mut tag = tags.entry();
        tag.prefix("Key").string("team");
        tag.prefix("Value").string("infra & ops");
        tags.finish();
        writer.prefix("DisableRollback").boolean(true);
        writer.prefix("TimeoutInMinutes").number(30);
        writer.finish();
        assert_eq!(
            "Action=CreateStack&Version=2010-05-15\
             &Tags.member.1.Key=team\
             &Tags.member.1.Value=infra%20%26%20ops\
             &DisableRollback=true\
             &TimeoutInMinutes=30",
            out
        );
    }

    #[test]
    fn maps_write_key_and_value() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Action", "1");
        let mut map = writer
            .prefix("ResourceIdentifier")
            .start_map(false, "key", "value");
        map.entry("BucketName").string("my-bucket");
        map.entry("Region").string("us-east-1");
        map.finish();
        writer.finish();
        assert_eq!(
            "Action=Action&Version=1\
             &ResourceIdentifier.entry.1.key=BucketName\
             &ResourceIdentifier.entry.1.value=my-bucket\
             &ResourceIdentifier.entry.2.key=Region\
             &ResourceIdentifier.entry.2.value=us-east-1",
            out
        );
    }

    #[test]
    fn timestamps() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Action", "1");
        writer
            .prefix("Time")
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime);
        writer.finish();
        assert_eq!("Action=Action&Version=1&Time=2019-12-16T23%3A48%3A18Z", out);
    }

    proptest! {
        #[test]
        fn values_never_leak_separators(value in ".*") {
            let mut out = String::new();
            let mut writer = QueryWriter::new(&mut out, "Action", "1");
            writer.prefix("Value").string(&value);
            writer.finish();
            let encoded = out.trim_start_matches("Action=Action&Version=1&Value=");
            prop_assert!(!encoded.contains('&'));
            prop_assert!(!encoded.contains('='));
        }
    }
}

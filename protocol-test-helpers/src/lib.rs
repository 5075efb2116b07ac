/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Request;
use pretty_assertions::Comparison;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("body did not match. {comparison}")]
    BodyDidNotMatch { comparison: String },
    #[error("body was not valid UTF-8")]
    InvalidBody,
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

/// How a body should be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// `application/x-www-form-urlencoded`: parameters are compared as a set, ignoring order
    UrlEncodedForm,
    /// Anything else is compared byte for byte
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/x-www-form-urlencoded" => MediaType::UrlEncodedForm,
            other => MediaType::Other(other.to_string()),
        }
    }
}

pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual_body =
        std::str::from_utf8(actual_body.as_ref()).map_err(|_| ProtocolTestFailure::InvalidBody)?;
    match media_type {
        MediaType::UrlEncodedForm => try_url_encoded_form_equivalent(actual_body, expected_body),
        MediaType::Other(_) => {
            if actual_body == expected_body {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: format!("{}", Comparison::new(&expected_body, &actual_body)),
                })
            }
        }
    }
}

fn try_url_encoded_form_equivalent(
    actual: &str,
    expected: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual = rewrite_url_encoded_body(actual);
    let expected = rewrite_url_encoded_body(expected);
    if actual == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: format!("{}", Comparison::new(&expected, &actual)),
        })
    }
}

/// Sorted, one parameter per line, so that a mismatch shows up as a readable diff
fn rewrite_url_encoded_body(body: &str) -> String {
    let mut params: Vec<&str> = body
        .split('&')
        .map(|param| param.trim())
        .filter(|param| !param.is_empty())
        .collect();
    params.sort_unstable();
    params.join("\n&")
}

#[cfg(test)]
mod tests {
    use crate::{validate_body, validate_headers, MediaType, ProtocolTestFailure};
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_form_body() {
        validate_body(
            "Action=DescribeStacks&Version=2010-05-15&StackName=s1",
            "Action=DescribeStacks&StackName=s1&Version=2010-05-15",
            MediaType::UrlEncodedForm,
        )
        .expect("parameter order does not matter");
        validate_body(
            "Action=DescribeStacks&Version=2010-05-15\n&StackName=s1",
            "Action=DescribeStacks\n&Version=2010-05-15&StackName=s1",
            MediaType::UrlEncodedForm,
        )
        .expect("whitespace around parameters is ignored");
        validate_body(
            "Action=DescribeStacks&Version=2010-05-15&StackName=s1",
            "Action=DescribeStacks&Version=2010-05-15&StackName=s2",
            MediaType::UrlEncodedForm,
        )
        .expect_err("values differ");
    }

    #[test]
    fn test_validate_other_body() {
        validate_body(b"abc", "abc", MediaType::from("text/plain")).expect("same bytes");
        validate_body(b"abc", "abd", MediaType::Other("text/plain".into())).expect_err("differs");
        validate_body(&[0xffu8][..], "", MediaType::UrlEncodedForm).expect_err("not utf-8");
        assert_eq!(
            MediaType::from("application/x-www-form-urlencoded"),
            MediaType::UrlEncodedForm
        );
    }
}

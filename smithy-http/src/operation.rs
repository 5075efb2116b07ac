/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Names an operation for logging and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A fully built HTTP request paired with the handler that knows how to parse its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<SdkBody>,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<SdkBody>, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn request(&self) -> &http::Request<SdkBody> {
        &self.request
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn into_request_response(self) -> (http::Request<SdkBody>, Parts<H>) {
        (self.request, self.parts)
    }
}

/// An error occurred while turning an input into an [`Operation`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required member was not set.
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// A member was set to a value that violates its constraints.
    #[error("{field} was invalid. {details}")]
    InvalidField {
        field: &'static str,
        details: String,
    },

    /// Serialization or request construction failed.
    #[error("an error occurred while building the request: {0}")]
    Other(#[source] BoxError),
}

#[cfg(test)]
mod test {
    use super::{BuildError, Metadata, Operation};
    use crate::body::SdkBody;

    #[test]
    fn operation_keeps_request_and_metadata() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .body(SdkBody::from("Action=ListStacks"))
            .expect("valid request");
        let op = Operation::new(request, ()).with_metadata(Metadata::new("ListStacks", "cloudformation"));
        assert_eq!(op.metadata().map(|m| m.name()), Some("ListStacks"));
        let (request, parts) = op.into_request_response();
        assert_eq!(request.method(), "POST");
        assert_eq!(parts.metadata.expect("set").service(), "cloudformation");
    }

    #[test]
    fn build_errors_name_the_field() {
        let err = BuildError::MissingField {
            field: "DescribeStackResourceInput.StackName",
            details: "StackName is required",
        };
        assert_eq!(
            err.to_string(),
            "DescribeStackResourceInput.StackName was missing. StackName is required"
        );
        let err = BuildError::InvalidField {
            field: "ListStacksInput.NextToken",
            details: "length must be between 1 and 1024, got 0".to_string(),
        };
        assert!(err.to_string().starts_with("ListStacksInput.NextToken was invalid."));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! A transport-agnostic Smithy service client.
#![warn(missing_debug_implementations, missing_docs)]

#[cfg(feature = "test-util")]
pub mod test_connection;

use smithy_http::body::SdkBody;
use smithy_http::middleware::load_response;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
pub use smithy_http::result::{SdkError, SdkSuccess};
use std::error::Error;
use tower::{Service, ServiceExt};
use tracing::Instrument;

type BoxError = Box<dyn Error + Send + Sync>;

/// Smithy service client.
///
/// The client owns a connector: a [`tower::Service`] that turns an [`http::Request<SdkBody>`]
/// into an [`http::Response<SdkBody>`]. Everything the protocol does not specify (signing,
/// retries, endpoint resolution, the actual network) is the connector's concern.
///
/// Each [`call`](Client::call) clones the connector, so the connector should be cheap to clone.
#[derive(Debug, Clone)]
pub struct Client<Connector> {
    connector: Connector,
}

/// A builder that provides more customization options when constructing a [`Client`].
///
/// To start, call [`Builder::new`]. Then, chain the method calls to configure the `Builder`.
/// When configured to your liking, call [`Builder::build`].
#[derive(Clone, Debug, Default)]
pub struct Builder<C = ()> {
    connector: C,
}

impl Builder<()> {
    /// Construct a new, unconfigured builder.
    ///
    /// This builder cannot yet be used, as it does not specify a [connector](Builder::connector).
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> Builder<C> {
    /// Specify the connector for the eventual client to use.
    ///
    /// The connector dictates how requests are turned into responses. Normally, this would entail
    /// sending the request to some kind of remote server, but in certain settings it's useful to
    /// be able to use a custom connector instead, such as to mock the network for tests.
    ///
    /// If you just want to specify a function from request to response instead, use
    /// [`Builder::map_connector`].
    pub fn connector<C2>(self, connector: C2) -> Builder<C2> {
        Builder { connector }
    }

    /// Use a connector that directly maps each request to a response.
    ///
    /// ```rust
    /// use smithy_client::Builder;
    /// use smithy_http::body::SdkBody;
    /// let client = Builder::new()
    ///   .map_connector(|req: http::Request<SdkBody>| {
    ///     async move {
    ///       Ok(http::Response::new(SdkBody::empty()))
    ///     }
    ///   })
    ///   .build();
    /// ```
    pub fn map_connector<F, FF>(self, map: F) -> Builder<tower::util::ServiceFn<F>>
    where
        F: Fn(http::Request<SdkBody>) -> FF + Send,
        FF: std::future::Future<Output = Result<http::Response<SdkBody>, BoxError>>,
    {
        self.connector(tower::service_fn(map))
    }

    /// Build a Smithy service [`Client`].
    pub fn build(self) -> Client<C> {
        Client {
            connector: self.connector,
        }
    }
}

impl<C> Client<C> {
    /// Creates a client that dispatches over `connector`.
    pub fn new(connector: C) -> Self {
        Builder::new().connector(connector).build()
    }
}

impl<C> Client<C>
where
    C: bounds::SmithyConnector,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E>(&self, input: Operation<O>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>>,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E>(&self, input: Operation<O>) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>>,
    {
        let (request, parts) = input.into_request_response();
        let (operation, service) = match &parts.metadata {
            Some(metadata) => (metadata.name().to_string(), metadata.service().to_string()),
            None => (String::from("unknown"), String::from("unknown")),
        };
        let span = tracing::debug_span!("dispatch", operation = %operation, service = %service);
        let mut connector = self.connector.clone();
        async move {
            let svc = ServiceExt::<http::Request<SdkBody>>::ready(&mut connector)
                .await
                .map_err(|err| SdkError::DispatchFailure(err.into()))?;
            let response = svc
                .call(request)
                .await
                .map_err(|err| SdkError::DispatchFailure(err.into()))?;
            tracing::debug!(status = %response.status(), "received response");
            load_response(response, &parts.response_handler).await
        }
        .instrument(span)
        .await
    }
}

/// This module holds convenient short-hands for the otherwise fairly extensive trait bounds
/// required for `call` and friends.
///
/// The short-hands will one day be true [trait aliases], but for now they are traits with blanket
/// implementations.
///
/// [trait aliases]: https://rust-lang.github.io/rfcs/1733-trait-alias.html
pub mod bounds {
    use super::*;

    /// A low-level Smithy connector that maps from [`http::Request`] to [`http::Response`].
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyConnector:
        Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = <Self as SmithyConnector>::Error,
            Future = <Self as SmithyConnector>::Future,
        > + Send
        + Clone
        + 'static
    {
        /// Forwarding type to `<Self as Service>::Error` for bound inference.
        ///
        /// See module-level docs for details.
        type Error: Into<BoxError> + Send + Sync + 'static;

        /// Forwarding type to `<Self as Service>::Future` for bound inference.
        ///
        /// See module-level docs for details.
        type Future: std::future::Future<
                Output = Result<http::Response<SdkBody>, <Self as SmithyConnector>::Error>,
            > + Send
            + 'static;
    }

    impl<T> SmithyConnector for T
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
        type Error = T::Error;
        type Future = T::Future;
    }
}

#[cfg(test)]
mod test {
    use crate::{Builder, SdkError};
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{Metadata, Operation};
    use smithy_http::response::ParseStrictResponse;

    #[derive(Clone)]
    struct EchoStatus;

    impl ParseStrictResponse for EchoStatus {
        type Output = Result<u16, String>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(response.status().as_u16())
            } else {
                Err(String::from_utf8_lossy(response.body()).into_owned())
            }
        }
    }

    fn operation() -> Operation<EchoStatus> {
        let request = http::Request::builder()
            .method("POST")
            .uri("https://cloudformation.us-east-1.amazonaws.com/")
            .body(SdkBody::from("Action=ListStacks&Version=2010-05-15"))
            .expect("valid request");
        Operation::new(request, EchoStatus).with_metadata(Metadata::new("ListStacks", "cloudformation"))
    }

    #[tokio::test]
    async fn dispatches_and_parses() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let client = Builder::new()
            .map_connector(|req: http::Request<SdkBody>| async move {
                assert_eq!(req.method(), "POST");
                Ok(http::Response::builder()
                    .status(200)
                    .body(SdkBody::from("<ListStacksResponse/>"))
                    .expect("valid response"))
            })
            .build();
        assert_eq!(client.call(operation()).await.expect("success"), 200);
    }

    #[tokio::test]
    async fn error_responses_become_service_errors() {
        let client = Builder::new()
            .map_connector(|_req: http::Request<SdkBody>| async move {
                Ok(http::Response::builder()
                    .status(400)
                    .body(SdkBody::from("throttled"))
                    .expect("valid response"))
            })
            .build();
        match client.call(operation()).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, "throttled");
                assert_eq!(raw.status().as_u16(), 400);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn connector_failures_are_dispatch_failures() {
        let client = Builder::new()
            .map_connector(|_req: http::Request<SdkBody>| async move {
                Err::<http::Response<SdkBody>, _>("connection refused".into())
            })
            .build();
        match client.call(operation()).await {
            Err(SdkError::DispatchFailure(err)) => {
                assert_eq!(err.to_string(), "connection refused")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

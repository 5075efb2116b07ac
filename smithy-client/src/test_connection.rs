/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! Module with client connectors useful for testing.

#![allow(missing_docs)]

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::oneshot;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Test Connection to capture a single request
#[derive(Debug, Clone)]
pub struct CaptureRequestHandler(Arc<Mutex<Inner>>);

#[derive(Debug)]
struct Inner {
    response: Option<http::Response<SdkBody>>,
    sender: Option<oneshot::Sender<http::Request<SdkBody>>>,
}

/// Receiver for [`CaptureRequestHandler`](CaptureRequestHandler)
#[derive(Debug)]
pub struct CaptureRequestReceiver {
    receiver: oneshot::Receiver<http::Request<SdkBody>>,
}

impl CaptureRequestReceiver {
    pub fn expect_request(mut self) -> http::Request<SdkBody> {
        self.receiver.try_recv().expect("no request was received")
    }
}

impl tower::Service<http::Request<SdkBody>> for CaptureRequestHandler {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<SdkBody>) -> Self::Future {
        let mut inner = self.0.lock().unwrap();
        inner
            .sender
            .take()
            .expect("already sent")
            .send(req)
            .expect("channel not ready");
        std::future::ready(Ok(inner
            .response
            .take()
            .expect("could not handle second request")))
    }
}

/// Test connection used to capture a single request
///
/// If response is `None`, it will reply with a 200 response with an empty body
pub fn capture_request(
    response: Option<http::Response<SdkBody>>,
) -> (CaptureRequestHandler, CaptureRequestReceiver) {
    let (tx, rx) = oneshot::channel();
    (
        CaptureRequestHandler(Arc::new(Mutex::new(Inner {
            response: Some(response.unwrap_or_else(|| {
                http::Response::builder()
                    .status(200)
                    .body(SdkBody::empty())
                    .expect("unreachable")
            })),
            sender: Some(tx),
        }))),
        CaptureRequestReceiver { receiver: rx },
    )
}

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Compares headers present on the expected request, the URI, and the body.
    ///
    /// Form-encoded bodies are compared as parameter sets so that member order does not matter.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        assert_eq!(actual.method(), expected.method(), "Method mismatch");
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(
                    actual_header.to_str().unwrap(),
                    value.to_str().unwrap(),
                    "Header mismatch for {:?}",
                    name
                );
            }
        }
        let actual_body = actual.body().bytes().unwrap_or(&[]);
        let expected_body = expected.body().bytes().unwrap_or(&[]);
        let media_type = match actual.headers().get(CONTENT_TYPE) {
            Some(content_type) => MediaType::from(content_type.to_str().unwrap()),
            None => MediaType::Other("unknown".to_string()),
        };
        match std::str::from_utf8(expected_body) {
            Ok(expected) => assert_ok(validate_body(actual_body, expected, media_type)),
            Err(_) => assert_eq!(actual_body, expected_body),
        };
        assert_eq!(actual.uri(), expected.uri());
    }
}

/// TestConnection for use with a [`Client`](crate::Client).
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// The generic parameter `B` is the type of the response body.
/// Usage example:
/// ```rust
/// use smithy_client::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = smithy_client::Client::from(conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Need a clone impl that ignores `B`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = self.data.lock().unwrap().len();
        let actual_requests = self.requests().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests ({} were made)",
            remaining_requests, actual_requests
        );
    }
}

impl<B> tower::Service<http::Request<SdkBody>> for TestConnection<B>
where
    SdkBody: From<B>,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = self.data.lock().unwrap().pop() {
            self.requests
                .lock()
                .unwrap()
                .push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(SdkBody::from)))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

impl<B> From<TestConnection<B>> for crate::Client<TestConnection<B>>
where
    B: Send + 'static,
    SdkBody: From<B>,
{
    fn from(tc: TestConnection<B>) -> Self {
        crate::Builder::new().connector(tc).build()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::{capture_request, TestConnection};
    use crate::Client;
    use http::header::CONTENT_TYPE;
    use smithy_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    fn is_send_sync<T: Send + Sync>(_: T) {}

    fn is_valid_smithy_connector<T>(_: T)
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Sync
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
    }

    fn form_request(body: &'static str) -> http::Request<SdkBody> {
        http::Request::builder()
            .method("POST")
            .uri("https://cloudformation.us-east-1.amazonaws.com/")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(SdkBody::from(body))
            .unwrap()
    }

    #[test]
    fn construct_test_client() {
        let test_conn = TestConnection::<String>::new(vec![]);
        let client: Client<_> = test_conn.into();
        is_send_sync(client);
    }

    #[test]
    fn oneshot_client() {
        let (tx, _rx) = capture_request(None);
        is_valid_smithy_connector(tx);
    }

    #[tokio::test]
    async fn replays_responses_in_order() {
        let mut conn = TestConnection::new(vec![
            (
                form_request("Action=ListStacks&Version=2010-05-15"),
                http::Response::builder().status(200).body("first").unwrap(),
            ),
            (
                form_request("Action=ListExports&Version=2010-05-15"),
                http::Response::builder().status(200).body("second").unwrap(),
            ),
        ]);
        // parameter order is irrelevant for form bodies
        let first = conn
            .ready()
            .await
            .unwrap()
            .call(form_request("Version=2010-05-15&Action=ListStacks"))
            .await
            .unwrap();
        assert_eq!(first.body().bytes(), Some(&b"first"[..]));
        let second = conn
            .ready()
            .await
            .unwrap()
            .call(form_request("Action=ListExports&Version=2010-05-15"))
            .await
            .unwrap();
        assert_eq!(second.body().bytes(), Some(&b"second"[..]));
        assert!(conn
            .ready()
            .await
            .unwrap()
            .call(form_request(""))
            .await
            .is_err());
        assert_eq!(conn.requests().len(), 2);
        conn.assert_requests_match(&[]);
    }

    #[tokio::test]
    #[should_panic]
    async fn mismatched_bodies_fail() {
        let mut conn = TestConnection::new(vec![(
            form_request("Action=ListStacks&Version=2010-05-15"),
            http::Response::builder().status(200).body("").unwrap(),
        )]);
        let _ = conn
            .ready()
            .await
            .unwrap()
            .call(form_request("Action=ListExports&Version=2010-05-15"))
            .await;
        conn.assert_requests_match(&[]);
    }

    #[tokio::test]
    async fn captures_the_request() {
        let (mut conn, rx) = capture_request(None);
        let response = conn
            .ready()
            .await
            .unwrap()
            .call(form_request("Action=ListStacks"))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let request = rx.expect_request();
        assert_eq!(request.body().bytes(), Some(&b"Action=ListStacks"[..]));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response-side plumbing: read a response body and hand it to an operation's parser.

use crate::body::SdkBody;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Load a response using `handler` to parse the results.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: http_body::Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        return sdk_result(parsed_response, response.map(|_| SdkBody::taken()));
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(err) => {
            return Err(SdkError::ResponseError {
                raw: response.map(|_| SdkBody::taken()),
                err: err.into(),
            });
        }
    };
    tracing::trace!(len = body.len(), "loaded response body");

    let response = response.map(|_| Bytes::from(body));
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response.map(SdkBody::from))
}

async fn read_body<B: http_body::Body + Unpin>(body: &mut B) -> Result<Vec<u8>, B::Error> {
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<SdkBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use super::load_response;
    use crate::body::SdkBody;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;

    struct Length;

    impl ParseStrictResponse for Length {
        type Output = Result<usize, String>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(response.body().len())
            } else {
                Err(String::from_utf8_lossy(response.body()).into_owned())
            }
        }
    }

    #[tokio::test]
    async fn loads_body_before_parsing() {
        let response = http::Response::builder()
            .status(200)
            .body(SdkBody::from("<ListStacksResponse/>"))
            .expect("valid response");
        let success = load_response(response, &Length).await.expect("parsed");
        assert_eq!(success.parsed, 21);
        assert_eq!(
            success.raw.body().bytes(),
            Some("<ListStacksResponse/>".as_bytes())
        );
    }

    #[tokio::test]
    async fn parser_errors_become_service_errors() {
        let response = http::Response::builder()
            .status(400)
            .body(SdkBody::from("bad"))
            .expect("valid response");
        match load_response(response, &Length).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, "bad");
                assert_eq!(raw.status().as_u16(), 400);
            }
            other => panic!("expected a service error, got {:?}", other),
        }
    }
}

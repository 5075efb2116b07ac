/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests and for holding loaded responses.
/// Bodies are always fully buffered: the awsQuery protocol never streams.
pub struct SdkBody {
    inner: Inner,
}

enum Inner {
    Once(Option<Bytes>),
    Taken,
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Once(Some(bytes)) => f.debug_tuple("SdkBody::Once").field(bytes).finish(),
            Inner::Once(None) => f.write_str("SdkBody::Once(<consumed>)"),
            Inner::Taken => f.write_str("SdkBody::Taken"),
        }
    }
}

impl SdkBody {
    /// An empty body.
    pub fn empty() -> Self {
        SdkBody {
            inner: Inner::Once(None),
        }
    }

    /// A body that has already been moved out, eg. by `mem::replace`.
    pub fn taken() -> Self {
        SdkBody {
            inner: Inner::Taken,
        }
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match &mut self.inner {
            Inner::Once(ref mut opt) => match opt.take() {
                Some(bytes) if bytes.is_empty() => Poll::Ready(None),
                Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                None => Poll::Ready(None),
            },
            Inner::Taken => Poll::Ready(Some(Err("A `Taken` body should never be polled".into()))),
        }
    }

    /// The in-memory contents of this body, if it has not been read yet.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Inner::Once(Some(bytes)) => Some(bytes.as_ref()),
            Inner::Once(None) => Some(&[][..]),
            Inner::Taken => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|bytes| bytes.len() as u64)
    }

    pub fn try_clone(&self) -> Option<Self> {
        match &self.inner {
            Inner::Once(bytes) => Some(SdkBody {
                inner: Inner::Once(bytes.clone()),
            }),
            Inner::Taken => None,
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody {
            inner: Inner::Once(Some(bytes)),
        }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.inner {
            Inner::Once(None) => true,
            Inner::Once(Some(bytes)) => bytes.is_empty(),
            Inner::Taken => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.content_length() {
            Some(len) => http_body::SizeHint::with_exact(len),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;
    use http_body::Body;

    #[test]
    fn content_length_matches_bytes() {
        let body = SdkBody::from("Action=ListStacks&Version=2010-05-15");
        assert_eq!(body.content_length(), Some(36));
        assert_eq!(SdkBody::empty().content_length(), Some(0));
        assert_eq!(SdkBody::taken().content_length(), None);
    }

    #[test]
    fn clones_share_contents() {
        let body = SdkBody::from(String::from("hello"));
        let cloned = body.try_clone().expect("in-memory bodies are cloneable");
        assert_eq!(cloned.bytes(), Some("hello".as_bytes()));
        assert!(SdkBody::taken().try_clone().is_none());
    }

    #[tokio::test]
    async fn body_is_read_once() {
        let mut body = SdkBody::from(vec![1u8, 2, 3]);
        assert!(!body.is_end_stream());
        let data = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(data.as_ref(), &[1u8, 2, 3]);
        assert!(body.data().await.is_none());
        assert!(body.is_end_stream());
    }
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types
//!
//! A response body starts life as a one-shot stream: once drained it
//! cannot be read again. [`Body`] models the two states explicitly, and
//! [`Body::materialize`] consumes the value, so a double read of the
//! same stream is unrepresentable.

use std::fmt;
use std::io;

use bytes::{Bytes, BytesMut};
use encoding_rs::Encoding;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use super::charset::charset_from_headers;
use super::request::Request;

/// A single-use response body stream.
///
/// Wraps whatever chunk source the transport produced. Dropping the
/// value closes the underlying stream.
pub struct BodyStream {
    inner: BoxStream<'static, io::Result<Bytes>>,
}

impl BodyStream {
    /// Wrap a chunk stream
    pub fn new(stream: impl Stream<Item = io::Result<Bytes>> + Send + 'static) -> Self {
        Self {
            inner: stream.boxed(),
        }
    }

    /// Drain the stream to a single byte sequence.
    ///
    /// Consumes the stream; there is no second read.
    pub async fn collect(mut self) -> io::Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.inner.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }
}

impl fmt::Debug for BodyStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyStream").finish_non_exhaustive()
    }
}

/// Response body in one of its two lifecycle states
#[derive(Debug)]
pub enum Body {
    /// Not yet read; draining it is destructive
    Stream(BodyStream),
    /// Fully buffered; re-readable
    Bytes(Bytes),
}

impl Body {
    /// Turn the body into a byte sequence, draining a stream if needed.
    ///
    /// A `Stream` body is read exactly once here. A `Bytes` body is
    /// returned as-is (cheap clone of the buffer handle).
    pub async fn materialize(self) -> io::Result<Bytes> {
        match self {
            Body::Stream(stream) => stream.collect().await,
            Body::Bytes(bytes) => Ok(bytes),
        }
    }

    /// Get the buffered bytes, if already materialized
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Stream(_) => None,
            Body::Bytes(bytes) => Some(bytes),
        }
    }

    /// Check whether the body is re-readable
    pub fn is_materialized(&self) -> bool {
        matches!(self, Body::Bytes(_))
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Body::Bytes(bytes)
    }
}

/// HTTP response as seen by the decode step
#[derive(Debug)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body, absent for bodyless responses
    pub body: Option<Body>,
    /// The request that produced this response
    pub request: Request,
}

impl Response {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: Option<Body>, request: Request) -> Self {
        Self {
            status,
            headers,
            body,
            request,
        }
    }

    /// Create a response with a materialized body
    pub fn from_bytes(
        status: StatusCode,
        headers: HeaderMap,
        body: impl Into<Bytes>,
        request: Request,
    ) -> Self {
        Self::new(status, headers, Some(Body::Bytes(body.into())), request)
    }

    /// Adapt a live reqwest response, keeping its body as a one-shot stream
    pub fn from_reqwest(response: reqwest::Response, request: Request) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| io::Error::new(io::ErrorKind::Other, e)));
        Self::new(
            status,
            headers,
            Some(Body::Stream(BodyStream::new(stream))),
            request,
        )
    }

    /// Get the originating request
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get all values for a header
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the declared charset, if any
    pub fn charset(&self) -> Option<&'static Encoding> {
        charset_from_headers(&self.headers)
    }

    /// Get the buffered body bytes, if present and materialized
    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref().and_then(Body::as_bytes)
    }
}

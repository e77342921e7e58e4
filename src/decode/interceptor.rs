// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Decode-time interception
//!
//! [`ReportingDecoder`] decorates a [`ResponseDecoder`]: every decode
//! call first captures the exchange as "Request" and "Response"
//! attachments, then forwards to the wrapped decoder. The wrapped
//! decoder sees a response whose body yields exactly the bytes the
//! original stream would have yielded, and its result or error passes
//! through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::attachment::{
    normalize_headers, AttachmentSink, RequestAttachment, ResponseAttachment,
    TEMPLATE_HTTP_REQUEST, TEMPLATE_HTTP_RESPONSE,
};
use crate::error::{Error, Result};
use crate::http::{charset_from_headers, decode_text, Body, Response};

use super::decoder::ResponseDecoder;

/// Decoder decorator that reports captured traffic to an attachment sink.
///
/// Holds no mutable state: the delegate is owned, the sink is shared.
/// Concurrent decode calls are independent.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use mustekala::attachment::TracingSink;
/// use mustekala::decode::{JsonDecoder, ReportingDecoder};
///
/// let decoder = ReportingDecoder::new(JsonDecoder, Arc::new(TracingSink));
/// ```
#[derive(Clone)]
pub struct ReportingDecoder<D> {
    delegate: D,
    sink: Arc<dyn AttachmentSink>,
}

impl<D> ReportingDecoder<D> {
    /// Wrap a decoder, reporting every exchange to the given sink
    pub fn new(delegate: D, sink: Arc<dyn AttachmentSink>) -> Self {
        Self { delegate, sink }
    }

    /// Get the wrapped decoder
    pub fn delegate(&self) -> &D {
        &self.delegate
    }
}

#[async_trait]
impl<D: ResponseDecoder> ResponseDecoder for ReportingDecoder<D> {
    async fn decode<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let Response {
            status,
            headers,
            body,
            request,
        } = response;

        let mut request_attachment =
            RequestAttachment::new(request.url_str(), request.method.as_str())
                .headers(normalize_headers(&request.headers));
        if let Some(ref body) = request.body {
            request_attachment = request_attachment.body(decode_text(body, request.charset()));
        }

        tracing::debug!(method = %request.method, url = %request.url, "Capturing request");
        self.sink
            .emit(request_attachment.into(), TEMPLATE_HTTP_REQUEST);

        let mut response_attachment =
            ResponseAttachment::new(status.as_u16()).headers(normalize_headers(&headers));

        // The stream is drained at most once; the rebuilt response
        // carries the materialized bytes instead.
        let body = match body {
            Some(body) => {
                let bytes = match body.materialize().await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        return Err(Error::body_capture(status.as_u16(), request, e));
                    }
                };
                let charset = charset_from_headers(&headers);
                response_attachment = response_attachment.body(decode_text(&bytes, charset));
                Some(Body::Bytes(bytes))
            }
            None => None,
        };

        tracing::debug!(status = status.as_u16(), "Capturing response");
        self.sink
            .emit(response_attachment.into(), TEMPLATE_HTTP_RESPONSE);

        let rebuilt = Response {
            status,
            headers,
            body,
            request,
        };
        self.delegate.decode(rebuilt).await
    }
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response decoder trait and stock implementations

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http::{decode_text, Response};

/// Turns a response into a typed value.
///
/// The capability seam of the crate: transports produce a [`Response`],
/// a decoder turns it into the caller's type. Decoders take the
/// response by value because decoding a streamed body is destructive.
#[async_trait]
pub trait ResponseDecoder: Send + Sync {
    /// Decode the response body into `T`
    async fn decode<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;
}

/// JSON decoder backed by serde_json
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

#[async_trait]
impl ResponseDecoder for JsonDecoder {
    async fn decode<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let bytes = match response.body {
            Some(body) => body.materialize().await?,
            None => Bytes::new(),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Plain-text decoder.
///
/// Decodes the body to text with the response's declared charset
/// (default UTF-8) and deserializes the resulting string, so `T` is
/// typically `String` or a newtype over it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextDecoder;

#[async_trait]
impl ResponseDecoder for TextDecoder {
    async fn decode<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let charset = response.charset();
        let bytes = match response.body {
            Some(body) => body.materialize().await?,
            None => Bytes::new(),
        };
        let text = decode_text(&bytes, charset);
        Ok(serde_json::from_value(serde_json::Value::String(text))?)
    }
}

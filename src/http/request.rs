// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request representation

use std::collections::HashMap;

use bytes::Bytes;
use encoding_rs::Encoding;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::Result;

use super::charset::charset_from_headers;

/// HTTP request as seen by the decode step.
///
/// Built by the transport layer before interception; this crate reads it
/// but never mutates it. The body, when present, is already buffered.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
}

impl Request {
    /// Create a new GET request
    pub fn get(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Create a new POST request
    pub fn post(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::POST, url)
    }

    /// Create a new request with arbitrary method
    pub fn new(method: Method, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            method,
            url: Url::parse(url.as_ref())?,
            headers: HeaderMap::new(),
            body: None,
        })
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Set multiple headers
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        for (name, value) in headers {
            self = self.header(name, value);
        }
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self> {
        let json = serde_json::to_vec(data)?;
        self.body = Some(Bytes::from(json));
        self = self.header("content-type", "application/json");
        Ok(self)
    }

    /// Get the URL as string
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }

    /// Get the content type
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }

    /// Get the declared charset, if any
    pub fn charset(&self) -> Option<&'static Encoding> {
        charset_from_headers(&self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let req = Request::get("https://example.com/path").unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.host_str(), Some("example.com"));
        assert!(req.body.is_none());
    }

    #[test]
    fn test_request_headers() {
        let req = Request::get("https://example.com")
            .unwrap()
            .header("x-custom", "value");
        assert_eq!(
            req.headers.get("x-custom").map(|v| v.to_str().unwrap()),
            Some("value")
        );
    }

    #[test]
    fn test_request_json_body() {
        let req = Request::post("https://example.com/api")
            .unwrap()
            .json(&serde_json::json!({"key": "value"}))
            .unwrap();
        assert_eq!(req.content_type(), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some(br#"{"key":"value"}"#.as_slice()));
    }

    #[test]
    fn test_request_charset() {
        let req = Request::post("https://example.com")
            .unwrap()
            .header("content-type", "text/plain; charset=utf-8");
        assert_eq!(req.charset(), Some(encoding_rs::UTF_8));
    }
}

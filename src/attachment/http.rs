// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP message attachments

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed name of every request attachment
pub const REQUEST_ATTACHMENT_NAME: &str = "Request";

/// Fixed name of every response attachment
pub const RESPONSE_ATTACHMENT_NAME: &str = "Response";

/// Captured request, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAttachment {
    /// Attachment name, always "Request"
    pub name: String,
    /// Target URL
    pub url: String,
    /// HTTP method name
    pub method: String,
    /// Normalized headers
    pub headers: HashMap<String, String>,
    /// Body text, absent for bodyless requests
    pub body: Option<String>,
}

impl RequestAttachment {
    /// Create a request attachment for the given target
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            name: REQUEST_ATTACHMENT_NAME.to_string(),
            url: url.into(),
            method: method.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Set the normalized headers
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set the body text
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Captured response, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseAttachment {
    /// Attachment name, always "Response"
    pub name: String,
    /// Response status code
    pub status: u16,
    /// Normalized headers
    pub headers: HashMap<String, String>,
    /// Body text, absent for bodyless responses
    pub body: Option<String>,
}

impl ResponseAttachment {
    /// Create a response attachment for the given status
    pub fn new(status: u16) -> Self {
        Self {
            name: RESPONSE_ATTACHMENT_NAME.to_string(),
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Set the normalized headers
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set the body text
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Either side of a captured HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attachment {
    Request(RequestAttachment),
    Response(ResponseAttachment),
}

impl Attachment {
    /// Get the attachment name
    pub fn name(&self) -> &str {
        match self {
            Attachment::Request(a) => &a.name,
            Attachment::Response(a) => &a.name,
        }
    }

    /// Get the body text, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            Attachment::Request(a) => a.body.as_deref(),
            Attachment::Response(a) => a.body.as_deref(),
        }
    }
}

impl From<RequestAttachment> for Attachment {
    fn from(a: RequestAttachment) -> Self {
        Attachment::Request(a)
    }
}

impl From<ResponseAttachment> for Attachment {
    fn from(a: ResponseAttachment) -> Self {
        Attachment::Response(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_attachment_names() {
        let attachment = RequestAttachment::new("https://example.com/api", "GET");
        assert_eq!(attachment.name, "Request");
        assert_eq!(Attachment::from(attachment).name(), "Request");
    }

    #[test]
    fn test_response_attachment_fields() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let attachment = ResponseAttachment::new(200)
            .headers(headers.clone())
            .body("{}");
        assert_eq!(attachment.name, "Response");
        assert_eq!(attachment.status, 200);
        assert_eq!(attachment.headers, headers);
        assert_eq!(attachment.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_attachment_serializes() {
        let attachment = Attachment::from(RequestAttachment::new("https://example.com", "POST"));
        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["name"], "Request");
        assert_eq!(json["method"], "POST");
        assert!(json["body"].is_null());
    }
}

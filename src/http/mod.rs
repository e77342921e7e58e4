// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP message types for decode-time interception
//!
//! Requests and responses here are not transport objects: they are the
//! already-received messages handed to the decode step. The one special
//! concern is the response body, which may still be an unread one-shot
//! stream and must be materialized before it can be read twice.

mod charset;
mod request;
mod response;

pub use charset::{charset_from_headers, decode_text};
pub use request::Request;
pub use response::{Body, BodyStream, Response};

/// Common HTTP headers
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
    pub const SET_COOKIE: &str = "set-cookie";
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Report attachments for captured HTTP traffic
//!
//! One attachment describes one HTTP message. Attachments are built
//! fresh per interception, handed to a sink, and owned by the sink from
//! then on.

mod headers;
mod http;
mod sink;

pub use headers::normalize_headers;
pub use http::{Attachment, RequestAttachment, ResponseAttachment};
pub use sink::{AttachmentSink, EmittedAttachment, FileSink, InMemorySink, TracingSink};

/// Template identifier for rendering request attachments
pub const TEMPLATE_HTTP_REQUEST: &str = "http-request";

/// Template identifier for rendering response attachments
pub const TEMPLATE_HTTP_RESPONSE: &str = "http-response";

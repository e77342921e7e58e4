// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Mustekala - HTTP Decode-Time Interception
//!
//! Wraps the response-decoding step of an HTTP client pipeline so every
//! request and response is captured as structured report attachments
//! before the real decoder runs. Built for test and security-scan
//! reporting: the attachments are what lands in the run report.
//!
//! ## Features
//!
//! - Transparent decoration: the wrapped decoder sees the same bytes,
//!   returns the same values, fails with the same errors
//! - One-shot stream safety: a streamed response body is drained exactly
//!   once and rebuilt as a re-readable buffer
//! - Header normalization for display, with per-line Set-Cookie rendering
//! - Charset-aware body text with an explicit UTF-8 default
//! - Pluggable sinks: in-memory capture, structured logging, JSON files
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mustekala::attachment::InMemorySink;
//! use mustekala::decode::{JsonDecoder, ReportingDecoder, ResponseDecoder};
//! use mustekala::http::{Request, Response};
//!
//! #[derive(serde::Deserialize)]
//! struct Greeting { message: String }
//!
//! # async fn run(response: Response) -> mustekala::Result<()> {
//! let sink = InMemorySink::new();
//! let decoder = ReportingDecoder::new(JsonDecoder, Arc::new(sink.clone()));
//!
//! let greeting: Greeting = decoder.decode(response).await?;
//! assert_eq!(sink.names(), vec!["Request", "Response"]);
//! # Ok(())
//! # }
//! ```

pub mod attachment;
pub mod decode;
pub mod error;
pub mod http;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP messages
pub use http::{Body, BodyStream, Request, Response};

// Attachments
pub use attachment::{
    Attachment, AttachmentSink, EmittedAttachment, FileSink, InMemorySink, RequestAttachment,
    ResponseAttachment, TracingSink,
};

// Decoding
pub use decode::{JsonDecoder, ReportingDecoder, ResponseDecoder, TextDecoder};

/// Mustekala version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

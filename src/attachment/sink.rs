// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Attachment sinks
//!
//! A sink receives finished attachments together with the template id
//! that selects how they render. Emission does not fail from the
//! caller's point of view; sinks that can fail internally log instead.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::http::Attachment;

/// Receiver of captured HTTP attachments.
///
/// Implementations must be safe to share across concurrent
/// interceptions; the interceptor holds one sink behind an `Arc`.
pub trait AttachmentSink: Send + Sync {
    /// Hand over one attachment for rendering with the given template
    fn emit(&self, attachment: Attachment, template: &str);
}

/// One recorded emission
#[derive(Debug, Clone)]
pub struct EmittedAttachment {
    /// The attachment as handed over
    pub attachment: Attachment,
    /// Template id it was emitted with
    pub template: String,
}

/// Sink that records every emission in memory.
///
/// The default sink for tests and for programmatic inspection of
/// captured traffic.
#[derive(Default)]
pub struct InMemorySink {
    emitted: Arc<RwLock<Vec<EmittedAttachment>>>,
}

impl InMemorySink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded emissions
    pub fn attachments(&self) -> Vec<EmittedAttachment> {
        self.emitted.read().clone()
    }

    /// Get the names of all recorded attachments, in emission order
    pub fn names(&self) -> Vec<String> {
        self.emitted
            .read()
            .iter()
            .map(|e| e.attachment.name().to_string())
            .collect()
    }

    /// Get the number of recorded emissions
    pub fn len(&self) -> usize {
        self.emitted.read().len()
    }

    /// Check whether nothing was emitted yet
    pub fn is_empty(&self) -> bool {
        self.emitted.read().is_empty()
    }

    /// Drop all recorded emissions
    pub fn clear(&self) {
        self.emitted.write().clear();
    }
}

impl Clone for InMemorySink {
    fn clone(&self) -> Self {
        Self {
            emitted: self.emitted.clone(),
        }
    }
}

impl AttachmentSink for InMemorySink {
    fn emit(&self, attachment: Attachment, template: &str) {
        self.emitted.write().push(EmittedAttachment {
            attachment,
            template: template.to_string(),
        });
    }
}

/// Sink that renders attachments as structured log events
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl AttachmentSink for TracingSink {
    fn emit(&self, attachment: Attachment, template: &str) {
        match &attachment {
            Attachment::Request(a) => tracing::info!(
                template,
                method = %a.method,
                url = %a.url,
                body = a.body.as_deref().unwrap_or(""),
                "Request"
            ),
            Attachment::Response(a) => tracing::info!(
                template,
                status = a.status,
                body = a.body.as_deref().unwrap_or(""),
                "Response"
            ),
        }
    }
}

/// Sink that persists each attachment as a JSON file.
///
/// Files are name-addressable: `0001-Request.json`, `0002-Response.json`
/// and so on under the configured directory. Write failures are logged,
/// not surfaced.
pub struct FileSink {
    dir: PathBuf,
    sequence: AtomicU64,
}

impl FileSink {
    /// Create a sink writing into the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Get the output directory
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl AttachmentSink for FileSink {
    fn emit(&self, attachment: Attachment, template: &str) {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let path = self
            .dir
            .join(format!("{:04}-{}.json", seq, attachment.name()));

        let result = serde_json::to_vec_pretty(&attachment)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&path, json));

        if let Err(e) = result {
            tracing::warn!(path = %path.display(), template, error = %e, "Failed to persist attachment");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::http::{RequestAttachment, ResponseAttachment};
    use crate::attachment::{TEMPLATE_HTTP_REQUEST, TEMPLATE_HTTP_RESPONSE};

    #[test]
    fn test_in_memory_sink_records_in_order() {
        let sink = InMemorySink::new();
        assert!(sink.is_empty());

        sink.emit(
            RequestAttachment::new("https://example.com", "GET").into(),
            TEMPLATE_HTTP_REQUEST,
        );
        sink.emit(ResponseAttachment::new(200).into(), TEMPLATE_HTTP_RESPONSE);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.names(), vec!["Request", "Response"]);
        assert_eq!(sink.attachments()[1].template, TEMPLATE_HTTP_RESPONSE);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_emitted_attachment_nameable_from_crate_root() {
        let sink = InMemorySink::new();
        sink.emit(
            RequestAttachment::new("https://example.com", "GET").into(),
            TEMPLATE_HTTP_REQUEST,
        );

        let emitted: Vec<crate::attachment::EmittedAttachment> = sink.attachments();
        assert_eq!(emitted[0].attachment.name(), "Request");
        assert_eq!(emitted[0].template, TEMPLATE_HTTP_REQUEST);
    }

    #[test]
    fn test_in_memory_sink_shared_between_clones() {
        let sink = InMemorySink::new();
        let clone = sink.clone();

        clone.emit(ResponseAttachment::new(404).into(), TEMPLATE_HTTP_RESPONSE);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_file_sink_writes_name_addressable_files() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());

        sink.emit(
            RequestAttachment::new("https://example.com/api", "GET").into(),
            TEMPLATE_HTTP_REQUEST,
        );
        sink.emit(
            ResponseAttachment::new(200).body("{}").into(),
            TEMPLATE_HTTP_RESPONSE,
        );

        let request_path = dir.path().join("0001-Request.json");
        let response_path = dir.path().join("0002-Response.json");
        assert!(request_path.exists());
        assert!(response_path.exists());

        let written = std::fs::read_to_string(response_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["name"], "Response");
        assert_eq!(value["status"], 200);
    }
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for mustekala
//!
//! Failures are structured values carrying machine-usable fields
//! (status, owning request, cause) for upstream handling. There is no
//! local recovery: a body-capture failure or a delegate failure is
//! terminal for the current invocation.

use thiserror::Error;

use crate::http::Request;

/// Result type alias for mustekala operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mustekala
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the response body stream failed during capture.
    ///
    /// Raised only while draining a not-yet-read body. Carries the
    /// response status and the owning request so callers can correlate
    /// the failure with the HTTP exchange. Never retried.
    #[error("failed to read response body")]
    BodyCapture {
        status: u16,
        request: Box<Request>,
        #[source]
        source: std::io::Error,
    },

    /// Decoding the response payload failed
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a body-capture error for the given exchange
    pub fn body_capture(status: u16, request: Request, source: std::io::Error) -> Self {
        Error::BodyCapture {
            status,
            request: Box::new(request),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a body-capture failure
    pub fn is_body_capture(&self) -> bool {
        matches!(self, Error::BodyCapture { .. })
    }

    /// Check if this is a decode failure
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::BodyCapture { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the owning request if available
    pub fn request(&self) -> Option<&Request> {
        match self {
            Error::BodyCapture { request, .. } => Some(request),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

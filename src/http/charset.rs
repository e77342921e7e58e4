// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Charset resolution and body text decoding
//!
//! The declared charset of an HTTP message is the `charset` parameter of
//! its Content-Type header. Messages without one decode as UTF-8: the
//! default is an explicit rule here, not a library accident, so the
//! bytes-to-text mapping is identical whether UTF-8 is declared or implied.

use encoding_rs::{Encoding, UTF_8};
use reqwest::header::HeaderMap;

use super::headers::CONTENT_TYPE;

/// Resolve the declared charset from a header map.
///
/// Returns `None` when no Content-Type is present, the header carries no
/// `charset` parameter, or the label is not a known encoding.
pub fn charset_from_headers(headers: &HeaderMap) -> Option<&'static Encoding> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let label = content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })?;
    Encoding::for_label(label.as_bytes())
}

/// Decode body bytes to text using the declared charset, defaulting to UTF-8.
///
/// Undecodable sequences are replaced, never failed on: the text is for
/// display in a report, not for round-tripping.
pub fn decode_text(bytes: &[u8], charset: Option<&'static Encoding>) -> String {
    let encoding = charset.unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

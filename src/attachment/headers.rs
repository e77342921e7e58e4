// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header normalization for display
//!
//! Collapses a multi-valued header map into single display strings.
//! `Set-Cookie` values join with newlines so each cookie renders on its
//! own line; everything else joins with `", "`.

use std::collections::HashMap;

use reqwest::header::HeaderMap;

use crate::http::headers::SET_COOKIE;

/// Normalize a header map into display-ready name/value pairs.
///
/// No entry is dropped; a header with no readable value yields an empty
/// string. Non-UTF-8 values are rendered lossily. An empty map
/// normalizes to an empty map.
pub fn normalize_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .keys()
        .map(|name| {
            let separator = if name.as_str().eq_ignore_ascii_case(SET_COOKIE) {
                "\n"
            } else {
                ", "
            };
            let value = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(separator);
            (name.to_string(), value)
        })
        .collect()
}

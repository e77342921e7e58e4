// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response decoding and decode-time interception
//!
//! [`ResponseDecoder`] is the single-method seam between transport and
//! typed results. [`ReportingDecoder`] wraps any implementation and
//! captures the exchange as report attachments before forwarding.

mod decoder;
mod interceptor;

pub use decoder::{JsonDecoder, ResponseDecoder, TextDecoder};
pub use interceptor::ReportingDecoder;

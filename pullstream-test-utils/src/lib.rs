// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the pullstream workspace.
//!
//! Everything here exists so the operator tests can set up sources
//! imperatively while keeping assertions on plain streams:
//!
//! - [`test_channel`] / [`test_item_channel`] turn an unbounded sender into
//!   a pull stream, so a test can push values (or in-band errors) while the
//!   operator under test pulls.
//! - [`ErrorInjectingStream`] wraps a value stream and injects an error at
//!   a chosen position.
//! - [`delayed_values`] yields values with a per-pull delay plus random
//!   jitter, which makes completion order racy on purpose.
//! - [`ConcurrencyProbe`] counts concurrently-active guards and records the
//!   peak, for asserting a concurrency bound was respected.
//! - The helper functions drive a stream and assert on the next item.
//!
//! Development and testing only; nothing here belongs in production code.

mod delayed;
mod error_injection;
mod helpers;
mod probe;
mod test_channel;

pub use delayed::delayed_values;
pub use error_injection::ErrorInjectingStream;
pub use helpers::{
    assert_no_element_emitted, collect_values, expect_next_error, expect_next_value,
};
pub use probe::{ConcurrencyProbe, ProbeGuard};
pub use test_channel::{test_channel, test_item_channel};

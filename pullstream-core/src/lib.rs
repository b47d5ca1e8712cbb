// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for lazy, pull-based stream processing.
//!
//! A *pull stream* is any [`futures::Stream`] whose items are
//! [`StreamItem<T>`]: a producer is asked for its next value only when the
//! consumer polls, values and failures travel in-band, and exhaustion is the
//! stream's ordinary end. This crate defines that shared vocabulary (the
//! item type, the error taxonomy and the boxed stream alias) and nothing
//! else; operators live in `pullstream-stream`, the bounded-concurrency
//! engine in `pullstream-merge`.
//!
//! # Examples
//!
//! ```
//! use futures::{stream, StreamExt};
//! use pullstream_core::StreamItem;
//!
//! # futures::executor::block_on(async {
//! let mut numbers = stream::iter([1, 2, 3].map(StreamItem::Value));
//!
//! assert_eq!(numbers.next().await, Some(StreamItem::Value(1)));
//! # });
//! ```

mod boxed;
mod error;
mod stream_item;

pub use boxed::{boxed, BoxPullStream};
pub use error::{PullStreamError, Result};
pub use stream_item::StreamItem;

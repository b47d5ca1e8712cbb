// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Pullstream
//!
//! Lazy pull-based stream operators with a bounded-concurrency merge
//! engine.
//!
//! ## Overview
//!
//! A pull stream is an ordinary [`futures::Stream`] of
//! [`StreamItem`]s: each `next().await` is one pull, values and errors
//! travel in-band, exhaustion is the stream's `None`. Nothing happens
//! between pulls: no buffering, no background tasks, no work the consumer
//! did not ask for. The one deliberate exception is the merge engine, which
//! runs up to a caller-chosen number of pulls concurrently while still
//! presenting a single pull-based stream to the consumer.
//!
//! ## Layout
//!
//! - [`pullstream_core`]: `StreamItem`, `PullStreamError`, the boxed
//!   stream alias ([`BoxPullStream`]).
//! - [`pullstream_collections`]: the [`CircularQueue`] and [`MinHeap`]
//!   backing the engine's ready buffer (usable on their own).
//! - [`pullstream_stream`]: generators and one-to-one operators.
//! - [`pullstream_merge`]: [`merge`](MergeExt::merge) and
//!   [`merge_map`](MergeMapExt::merge_map).
//!
//! ## Quick Start
//!
//! ```
//! use pullstream::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let streams = vec![
//!     from_values(vec![1, 2, 3]),
//!     from_values(vec![4, 5, 6]),
//! ];
//!
//! let mut values: Vec<i32> = streams
//!     .merge_concurrent(2)
//!     .filter_map(|item| async { item.ok() })
//!     .collect()
//!     .await;
//! values.sort_unstable();
//! assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
//! # }
//! ```

pub use pullstream_core::{boxed, BoxPullStream, PullStreamError, Result, StreamItem};

pub use pullstream_collections::{CircularQueue, MinHeap, MIN_CAPACITY};

pub use pullstream_stream::{
    concat, create_pull_stream, from_values, BufferCount, BufferCountExt, FilterItemsExt,
    FlatItemsExt, MapError, MapErrorExt, MapItemsExt, Step, TapItemsExt,
};

pub use pullstream_merge::{
    Merge, MergeExt, MergeMap, MergeMapExt, YieldPolicy, DEFAULT_CONCURRENCY,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{boxed, BoxPullStream, PullStreamError, Result, StreamItem};
    pub use crate::{
        concat, create_pull_stream, from_values, BufferCountExt, FilterItemsExt, FlatItemsExt,
        MapErrorExt, MapItemsExt, Step, TapItemsExt,
    };
    pub use crate::{MergeExt, MergeMapExt, YieldPolicy, DEFAULT_CONCURRENCY};
    pub use futures::StreamExt;
}

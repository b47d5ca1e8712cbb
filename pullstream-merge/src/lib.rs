// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded-concurrency merging for pull streams.
//!
//! Two operators share one session shape:
//!
//! - [`merge`](MergeExt::merge) drains a vector of streams concurrently, at
//!   most `count` active at a time, yielding values as their pulls complete
//!   (completion order, not input order).
//! - [`merge_map`](MergeMapExt::merge_map) fans one upstream across at most
//!   `count` concurrent asynchronous transforms.
//!
//! A session is a plain `poll_next` state machine: every slot is an owned
//! pull future raced inside a `FuturesUnordered`, completions are buffered
//! through the workspace collections, and the consumer is woken whenever
//! any slot finishes. There are no locks and no spawned tasks, so the
//! engine runs on any executor.
//!
//! # Guarantees
//!
//! - At most `count` operations outstanding at any instant, and at most
//!   `count` completed-but-unconsumed results buffered.
//! - The first error from any source or mapper terminates the merged
//!   stream (fail-fast); later errors are discarded. Values yielded before
//!   the failure remain valid.
//! - Output order is completion order. Only the final multiset is
//!   deterministic when sources race; tests should sort before asserting.
//!
//! # Examples
//!
//! ```
//! use futures::StreamExt;
//! use pullstream_merge::MergeExt;
//! use pullstream_stream::from_values;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let streams = vec![
//!     from_values(vec![1, 2, 3]),
//!     from_values(vec![4, 5, 6]),
//!     from_values(vec![7, 8, 9]),
//! ];
//!
//! let mut values: Vec<i32> = streams
//!     .merge_concurrent(2)
//!     .filter_map(|item| async { item.ok() })
//!     .collect()
//!     .await;
//! values.sort_unstable();
//! assert_eq!(values, (1..=9).collect::<Vec<_>>());
//! # }
//! ```

mod logging;
mod merge;
mod merge_map;
mod ready_buffer;

pub use merge::{Merge, MergeExt, DEFAULT_CONCURRENCY};
pub use merge_map::{MergeMap, MergeMapExt};
pub use ready_buffer::YieldPolicy;

// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use futures::{stream, Stream, StreamExt};
use pullstream_core::StreamItem;
use tokio::time::sleep;

/// A pull stream whose every pull sleeps for `base` plus a random jitter of
/// up to `jitter_ms` milliseconds before yielding the next value.
///
/// The jitter makes completion order across several such streams
/// deliberately racy; assertions against their merge should compare sorted
/// values or multisets, never interleavings.
pub fn delayed_values<T>(
    values: Vec<T>,
    base: Duration,
    jitter_ms: u64,
) -> impl Stream<Item = StreamItem<T>> + Unpin + Send
where
    T: Send + 'static,
{
    stream::iter(values)
        .then(move |value| async move {
            let jitter = Duration::from_millis(fastrand::u64(0..=jitter_ms));
            sleep(base + jitter).await;
            StreamItem::Value(value)
        })
        .boxed()
}

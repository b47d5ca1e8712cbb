// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, Stream, StreamExt};
use pullstream_core::StreamItem;

/// Chains pull streams end to end: the second stream is not pulled until
/// the first is exhausted.
///
/// Errors pass through in place; a source that errors and keeps producing
/// keeps being drained, the switch to the next source happens only on
/// exhaustion.
///
/// # Examples
///
/// ```
/// use futures::StreamExt;
/// use pullstream_stream::{concat, from_values};
///
/// # futures::executor::block_on(async {
/// let chained = concat(vec![from_values(vec![1, 2]), from_values(vec![3])]);
/// let values: Vec<i32> = chained.filter_map(|item| async { item.ok() }).collect().await;
/// assert_eq!(values, vec![1, 2, 3]);
/// # });
/// ```
pub fn concat<S, T>(streams: Vec<S>) -> impl Stream<Item = StreamItem<T>>
where
    S: Stream<Item = StreamItem<T>>,
{
    stream::iter(streams).flatten()
}

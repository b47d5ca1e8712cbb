// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use futures::{Stream, StreamExt};
use futures_util::stream::FuturesUnordered;
use pullstream_core::{boxed, BoxPullStream, PullStreamError, StreamItem};

use crate::logging::warn;
use crate::ready_buffer::{ReadyBuffer, YieldPolicy};

/// Concurrency bound used by [`MergeExt::merge`] and
/// [`MergeMapExt::merge_map`](crate::MergeMapExt::merge_map).
pub const DEFAULT_CONCURRENCY: usize = 10;

/// A finished pull: the slot index, the stream handed back for re-arming,
/// and the outcome (`None` means the source is exhausted).
type SlotCompletion<T> = (usize, BoxPullStream<T>, Option<StreamItem<T>>);

/// One outstanding pull. The future owns its stream and returns it with the
/// outcome, so whichever slot finishes first hands its source back for the
/// next request.
fn arm<T>(index: usize, mut stream: BoxPullStream<T>) -> BoxFuture<'static, SlotCompletion<T>>
where
    T: Send + 'static,
{
    Box::pin(async move {
        let item = stream.next().await;
        (index, stream, item)
    })
}

/// Drains several pull streams concurrently, at most `count` at a time,
/// yielding values in completion order.
///
/// Built by [`MergeExt`]. Slots are pull futures raced inside a
/// [`FuturesUnordered`]; completions land in a ready buffer whose pick
/// order is governed by the [`YieldPolicy`]. Streams beyond `count` wait in
/// a backlog and are assigned to slots last-in-first-out as sources
/// exhaust. The refill order affects which values interleave, never the
/// final multiset.
///
/// The first in-band error terminates the merged stream: it is yielded once
/// and every outstanding pull is dropped. Errors completing afterwards are
/// discarded, not aggregated.
pub struct Merge<T> {
    backlog: Vec<BoxPullStream<T>>,
    in_flight: FuturesUnordered<BoxFuture<'static, SlotCompletion<T>>>,
    ready: ReadyBuffer<T>,
    error: Option<PullStreamError>,
    done: bool,
}

impl<T> Merge<T>
where
    T: Send + 'static,
{
    pub(crate) fn new(mut backlog: Vec<BoxPullStream<T>>, count: usize, policy: YieldPolicy) -> Self {
        // A zero bound could never arm a slot and would hang a non-empty
        // input forever.
        let count = count.max(1);
        let in_flight = FuturesUnordered::new();

        let slots = backlog.len().min(count);
        for index in 0..slots {
            if let Some(stream) = backlog.pop() {
                in_flight.push(arm(index, stream));
            }
        }

        Self {
            backlog,
            in_flight,
            ready: ReadyBuffer::new(policy, count),
            error: None,
            done: false,
        }
    }
}

impl<T> Unpin for Merge<T> {}

impl<T> Stream for Merge<T>
where
    T: Send + 'static,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);

        if this.done {
            return Poll::Ready(None);
        }

        // Drain every completion that is already available before picking a
        // result, so the ready buffer reflects completion order.
        while let Poll::Ready(Some((index, stream, item))) = this.in_flight.poll_next_unpin(cx) {
            match item {
                Some(StreamItem::Value(value)) => {
                    // The slot stays un-armed until this result is consumed,
                    // which caps outstanding + buffered at `count`.
                    this.ready.push(index, stream, value);
                }
                Some(StreamItem::Error(error)) => {
                    if this.error.is_none() {
                        this.error = Some(error);
                    } else {
                        warn!("merge: discarding error from slot {index} after first failure: {error}");
                    }
                }
                None => {
                    // Source exhausted: retire the slot, or hand it the next
                    // backlog stream (LIFO).
                    if let Some(next) = this.backlog.pop() {
                        this.in_flight.push(arm(index, next));
                    }
                }
            }
        }

        // An error outranks buffered results.
        if let Some(error) = this.error.take() {
            this.done = true;
            this.backlog.clear();
            this.in_flight.clear();
            return Poll::Ready(Some(StreamItem::Error(error)));
        }

        if let Some(slot) = this.ready.pop() {
            // Re-arm before handing the value to the consumer.
            this.in_flight.push(arm(slot.index, slot.stream));
            return Poll::Ready(Some(StreamItem::Value(slot.value)));
        }

        if this.in_flight.is_empty() {
            this.done = true;
            return Poll::Ready(None);
        }

        Poll::Pending
    }
}

/// Extension trait merging a vector of pull streams with a concurrency
/// bound.
///
/// # Examples
///
/// ```
/// use futures::StreamExt;
/// use pullstream_merge::MergeExt;
/// use pullstream_stream::from_values;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let streams = vec![from_values(vec![1, 2]), from_values(vec![3, 4])];
/// let merged = streams.merge_concurrent(2);
///
/// let mut values: Vec<i32> = merged.filter_map(|item| async { item.ok() }).collect().await;
/// values.sort_unstable();
/// assert_eq!(values, vec![1, 2, 3, 4]);
/// # }
/// ```
pub trait MergeExt {
    type Item;

    /// Merges with the [`DEFAULT_CONCURRENCY`] bound and arrival order.
    fn merge(self) -> Merge<Self::Item>;

    /// Merges with at most `count` pulls outstanding at any instant.
    fn merge_concurrent(self, count: usize) -> Merge<Self::Item>;

    /// Merges with an explicit bound and [`YieldPolicy`].
    fn merge_with_policy(self, count: usize, policy: YieldPolicy) -> Merge<Self::Item>;
}

impl<S, T> MergeExt for Vec<S>
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    type Item = T;

    fn merge(self) -> Merge<T> {
        self.merge_with_policy(DEFAULT_CONCURRENCY, YieldPolicy::Arrival)
    }

    fn merge_concurrent(self, count: usize) -> Merge<T> {
        self.merge_with_policy(count, YieldPolicy::Arrival)
    }

    fn merge_with_policy(self, count: usize, policy: YieldPolicy) -> Merge<T> {
        let streams = self.into_iter().map(boxed).collect();
        Merge::new(streams, count, policy)
    }
}

// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use futures::{Stream, StreamExt};
use futures_util::stream::FuturesUnordered;
use pullstream_collections::CircularQueue;
use pullstream_core::{boxed, BoxPullStream, PullStreamError, Result, StreamItem};

use crate::logging::warn;
use crate::merge::DEFAULT_CONCURRENCY;

type BoxMapper<T, R> = Box<dyn FnMut(T) -> BoxFuture<'static, Result<R>> + Send>;

/// Fans a single upstream out across at most `count` concurrent mapper
/// applications, yielding results in completion order.
///
/// Built by [`MergeMapExt`]. Upstream pulls are serialized (a pull stream
/// has one consumer); the concurrency is in the mapper futures. A new value
/// is pulled only while in-flight mappers plus buffered results stay below
/// `count`, which bounds resource usage no matter how fast the consumer
/// drains.
///
/// An upstream error and a mapper error are treated identically: the first
/// one terminates the stream, outstanding mappers are dropped, later errors
/// are discarded.
pub struct MergeMap<T, R> {
    upstream: Option<BoxPullStream<T>>,
    mapper: BoxMapper<T, R>,
    in_flight: FuturesUnordered<BoxFuture<'static, Result<R>>>,
    ready: CircularQueue<R>,
    error: Option<PullStreamError>,
    count: usize,
    done: bool,
}

impl<T, R> MergeMap<T, R> {
    pub(crate) fn new(upstream: BoxPullStream<T>, mapper: BoxMapper<T, R>, count: usize) -> Self {
        let count = count.max(1);
        Self {
            upstream: Some(upstream),
            mapper,
            in_flight: FuturesUnordered::new(),
            ready: CircularQueue::with_capacity(count + 1),
            error: None,
            count,
            done: false,
        }
    }

    fn record_error(&mut self, error: PullStreamError) {
        if self.error.is_none() {
            self.error = Some(error);
        } else {
            warn!("merge_map: discarding error after first failure: {error}");
        }
    }

    /// Pulls from upstream while there is slot capacity, starting a mapper
    /// for every value. Outstanding mappers plus buffered results never
    /// exceed `count`.
    fn fill(&mut self, cx: &mut Context<'_>) {
        while self.error.is_none() && self.in_flight.len() + self.ready.len() < self.count {
            let Some(upstream) = self.upstream.as_mut() else {
                break;
            };
            match upstream.poll_next_unpin(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    let fut = (self.mapper)(value);
                    self.in_flight.push(fut);
                }
                Poll::Ready(Some(StreamItem::Error(error))) => self.record_error(error),
                Poll::Ready(None) => {
                    // Nothing left to pull; started mappers keep draining.
                    self.upstream = None;
                }
                Poll::Pending => break,
            }
        }
    }
}

impl<T, R> Unpin for MergeMap<T, R> {}

impl<T, R> Stream for MergeMap<T, R> {
    type Item = StreamItem<R>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);

        if this.done {
            return Poll::Ready(None);
        }

        loop {
            this.fill(cx);

            let mut completed = false;
            while let Poll::Ready(Some(result)) = this.in_flight.poll_next_unpin(cx) {
                match result {
                    Ok(value) => {
                        this.ready.enqueue(value);
                        completed = true;
                    }
                    Err(error) => this.record_error(error),
                }
            }

            // A completed mapper freed a slot; give upstream another chance
            // before deciding whether to suspend.
            if !completed {
                break;
            }
        }

        // An error outranks buffered results.
        if let Some(error) = this.error.take() {
            this.done = true;
            this.upstream = None;
            this.in_flight.clear();
            return Poll::Ready(Some(StreamItem::Error(error)));
        }

        if let Ok(value) = this.ready.dequeue() {
            // Refill the freed slot before yielding.
            this.fill(cx);
            return Poll::Ready(Some(StreamItem::Value(value)));
        }

        if this.upstream.is_none() && this.in_flight.is_empty() {
            this.done = true;
            return Poll::Ready(None);
        }

        Poll::Pending
    }
}

/// Extension trait applying an asynchronous, fallible transform across a
/// bounded number of concurrent slots.
///
/// # Examples
///
/// ```
/// use futures::StreamExt;
/// use pullstream_merge::MergeMapExt;
/// use pullstream_stream::from_values;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mapped = from_values(vec![1, 2, 3]).merge_map(|x| async move { Ok(x * 10) });
///
/// let mut values: Vec<i32> = mapped.filter_map(|item| async { item.ok() }).collect().await;
/// values.sort_unstable();
/// assert_eq!(values, vec![10, 20, 30]);
/// # }
/// ```
pub trait MergeMapExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Maps with the [`DEFAULT_CONCURRENCY`] bound.
    fn merge_map<R, F, Fut>(self, mapper: F) -> MergeMap<T, R>
    where
        Self: Send + 'static,
        T: Send + 'static,
        R: Send + 'static,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static;

    /// Maps with at most `count` pull-and-map operations in flight.
    fn merge_map_concurrent<R, F, Fut>(self, count: usize, mapper: F) -> MergeMap<T, R>
    where
        Self: Send + 'static,
        T: Send + 'static,
        R: Send + 'static,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static;
}

impl<S, T> MergeMapExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
{
    fn merge_map<R, F, Fut>(self, mapper: F) -> MergeMap<T, R>
    where
        Self: Send + 'static,
        T: Send + 'static,
        R: Send + 'static,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        self.merge_map_concurrent(DEFAULT_CONCURRENCY, mapper)
    }

    fn merge_map_concurrent<R, F, Fut>(self, count: usize, mut mapper: F) -> MergeMap<T, R>
    where
        Self: Send + 'static,
        T: Send + 'static,
        R: Send + 'static,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        let mapper: BoxMapper<T, R> = Box::new(move |value| Box::pin(mapper(value)));
        MergeMap::new(boxed(self), mapper, count)
    }
}

// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use pullstream_core::{PullStreamError, StreamItem};

/// Substitutes the first in-band error with a value, built by
/// [`MapErrorExt`].
///
/// Values before the error pass through untouched. When an error arrives it
/// is handed to the mapper, the produced value is yielded in its place and
/// the stream ends; the faulted source is not pulled again.
pub struct MapError<S, F> {
    inner: S,
    mapper: F,
    done: bool,
}

impl<S, T, F> Stream for MapError<S, F>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    F: FnMut(PullStreamError) -> T + Unpin,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);

        if this.done {
            return Poll::Ready(None);
        }

        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(StreamItem::Value(value))) => {
                Poll::Ready(Some(StreamItem::Value(value)))
            }
            Poll::Ready(Some(StreamItem::Error(error))) => {
                this.done = true;
                Poll::Ready(Some(StreamItem::Value((this.mapper)(error))))
            }
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Extension trait providing the `map_error` operator for pull streams.
pub trait MapErrorExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Replaces the first error with a fallback value and ends the stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::StreamExt;
    /// use pullstream_core::{PullStreamError, StreamItem};
    /// use pullstream_stream::MapErrorExt;
    ///
    /// # futures::executor::block_on(async {
    /// let faulty = futures::stream::iter(vec![
    ///     StreamItem::Value(1),
    ///     StreamItem::Error(PullStreamError::upstream_context("boom")),
    ///     StreamItem::Value(99),
    /// ]);
    ///
    /// let values: Vec<i32> = faulty
    ///     .map_error(|_| -1)
    ///     .filter_map(|item| async { item.ok() })
    ///     .collect()
    ///     .await;
    /// // The fallback terminates the stream; 99 is never pulled.
    /// assert_eq!(values, vec![1, -1]);
    /// # });
    /// ```
    fn map_error<F>(self, mapper: F) -> MapError<Self, F>
    where
        F: FnMut(PullStreamError) -> T;
}

impl<S, T> MapErrorExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn map_error<F>(self, mapper: F) -> MapError<Self, F>
    where
        F: FnMut(PullStreamError) -> T,
    {
        MapError {
            inner: self,
            mapper,
            done: false,
        }
    }
}

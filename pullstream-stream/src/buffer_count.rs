// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use pullstream_collections::CircularQueue;
use pullstream_core::StreamItem;

/// Groups consecutive values into vectors of `size`, built by
/// [`BufferCountExt`].
///
/// The accumulator is a [`CircularQueue`], drained with a single batch
/// dequeue per emitted chunk. A partial chunk left at exhaustion is flushed
/// as a final shorter vector. Errors are forwarded immediately without
/// flushing; buffered values stay queued for the next full chunk.
pub struct BufferCount<S, T> {
    inner: S,
    buf: CircularQueue<T>,
    size: usize,
    done: bool,
}

impl<S, T> BufferCount<S, T> {
    fn new(inner: S, size: usize) -> Self {
        Self {
            inner,
            buf: CircularQueue::with_capacity(size),
            size,
            done: false,
        }
    }
}

impl<S, T> Stream for BufferCount<S, T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: Unpin,
{
    type Item = StreamItem<Vec<T>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);

        if this.done {
            return Poll::Ready(None);
        }

        loop {
            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    this.buf.enqueue(value);
                    if this.buf.len() == this.size {
                        let chunk = this.buf.batch_dequeue(this.size);
                        return Poll::Ready(Some(chunk.into()));
                    }
                }
                Poll::Ready(Some(StreamItem::Error(error))) => {
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Poll::Ready(None) => {
                    this.done = true;
                    if this.buf.is_empty() {
                        return Poll::Ready(None);
                    }
                    let remainder = this.buf.len();
                    return Poll::Ready(Some(this.buf.batch_dequeue(remainder).into()));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Extension trait providing the `buffer_count` operator for pull streams.
pub trait BufferCountExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Collects values into chunks of `size`, flushing the remainder on
    /// exhaustion.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::StreamExt;
    /// use pullstream_stream::{from_values, BufferCountExt};
    ///
    /// # futures::executor::block_on(async {
    /// let chunks: Vec<Vec<i32>> = from_values(vec![1, 2, 3, 4, 5])
    ///     .buffer_count(2)
    ///     .filter_map(|item| async { item.ok() })
    ///     .collect()
    ///     .await;
    /// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// # });
    /// ```
    fn buffer_count(self, size: usize) -> BufferCount<Self, T>;
}

impl<S, T> BufferCountExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn buffer_count(self, size: usize) -> BufferCount<Self, T> {
        // A zero chunk size would never fill; treat it as 1.
        BufferCount::new(self, size.max(1))
    }
}

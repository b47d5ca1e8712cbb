// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use pullstream_core::{PullStreamError, StreamItem};

/// A stream wrapper that injects an in-band error at a chosen position.
///
/// Wraps a stream of plain values, yielding each as `StreamItem::Value` and
/// inserting a single `StreamItem::Error` before the value at
/// `inject_error_at` (0-indexed). The wrapped stream keeps producing after
/// the injection, which is exactly what fail-fast tests need: values that
/// arrive after the error must be discarded by the operator under test, not
/// by the source.
///
/// # Examples
///
/// ```
/// use futures::{stream, StreamExt};
/// use pullstream_core::StreamItem;
/// use pullstream_test_utils::ErrorInjectingStream;
///
/// # futures::executor::block_on(async {
/// let mut faulty = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 1);
///
/// assert!(matches!(faulty.next().await, Some(StreamItem::Value(1))));
/// assert!(matches!(faulty.next().await, Some(StreamItem::Error(_))));
/// assert!(matches!(faulty.next().await, Some(StreamItem::Value(2))));
/// assert!(faulty.next().await.is_none());
/// # });
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    position: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Wraps `inner`, scheduling one error before the item at
    /// `inject_error_at`.
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            position: 0,
        }
    }
}

impl<S, T> Stream for ErrorInjectingStream<S>
where
    S: Stream<Item = T> + Unpin,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);

        if this.inject_error_at == Some(this.position) {
            this.inject_error_at = None;
            this.position += 1;
            let error = PullStreamError::upstream_context(format!(
                "injected error at position {}",
                this.position - 1
            ));
            return Poll::Ready(Some(StreamItem::Error(error)));
        }

        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(value)) => {
                this.position += 1;
                Poll::Ready(Some(StreamItem::Value(value)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

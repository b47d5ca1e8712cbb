// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::Either;
use futures::{future, stream, Stream, StreamExt};
use pullstream_core::StreamItem;

/// Extension trait providing the `flat_items` operator for streams of
/// vectors.
pub trait FlatItemsExt<T>: Stream<Item = StreamItem<Vec<T>>> + Sized {
    /// Flattens each vector value into its elements, in order.
    ///
    /// Empty vectors contribute nothing. Errors pass through as single
    /// items.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::StreamExt;
    /// use pullstream_stream::{from_values, FlatItemsExt};
    ///
    /// # futures::executor::block_on(async {
    /// let flat: Vec<i32> = from_values(vec![vec![1, 2], vec![], vec![3]])
    ///     .flat_items()
    ///     .filter_map(|item| async { item.ok() })
    ///     .collect()
    ///     .await;
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// # });
    /// ```
    fn flat_items(self) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> FlatItemsExt<T> for S
where
    S: Stream<Item = StreamItem<Vec<T>>>,
{
    fn flat_items(self) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        self.flat_map(|item| match item {
            StreamItem::Value(values) => {
                Either::Left(stream::iter(values.into_iter().map(StreamItem::Value)))
            }
            StreamItem::Error(error) => {
                Either::Right(stream::once(future::ready(StreamItem::Error(error))))
            }
        })
    }
}

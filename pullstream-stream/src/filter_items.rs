// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{future, Stream, StreamExt};
use pullstream_core::StreamItem;

/// Extension trait providing the `filter_items` operator for pull streams.
pub trait FilterItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Keeps only the values the predicate accepts.
    ///
    /// Errors are never filtered; they pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::StreamExt;
    /// use pullstream_stream::{from_values, FilterItemsExt};
    ///
    /// # futures::executor::block_on(async {
    /// let evens: Vec<i32> = from_values(vec![1, 2, 3, 4])
    ///     .filter_items(|x| x % 2 == 0)
    ///     .filter_map(|item| async { item.ok() })
    ///     .collect()
    ///     .await;
    /// assert_eq!(evens, vec![2, 4]);
    /// # });
    /// ```
    fn filter_items<F>(self, predicate: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(&T) -> bool + Send + 'static;
}

impl<S, T> FilterItemsExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn filter_items<F>(self, mut predicate: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(&T) -> bool + Send + 'static,
    {
        self.filter_map(move |item| {
            let keep = match &item {
                StreamItem::Value(value) => predicate(value),
                StreamItem::Error(_) => true,
            };
            future::ready(keep.then_some(item))
        })
    }
}

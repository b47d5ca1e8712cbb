// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use pullstream_core::StreamItem;

/// Extension trait providing the `map_items` operator for pull streams.
pub trait MapItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Transforms each value with a synchronous function.
    ///
    /// Errors pass through unchanged. One pull on the result is exactly one
    /// pull on the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::StreamExt;
    /// use pullstream_stream::{from_values, MapItemsExt};
    ///
    /// # futures::executor::block_on(async {
    /// let lengths: Vec<usize> = from_values(vec!["a", "bc"])
    ///     .map_items(str::len)
    ///     .filter_map(|item| async { item.ok() })
    ///     .collect()
    ///     .await;
    /// assert_eq!(lengths, vec![1, 2]);
    /// # });
    /// ```
    fn map_items<U, F>(self, f: F) -> impl Stream<Item = StreamItem<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> U + Send + 'static;
}

impl<S, T> MapItemsExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn map_items<U, F>(self, mut f: F) -> impl Stream<Item = StreamItem<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        self.map(move |item| item.map(&mut f))
    }
}

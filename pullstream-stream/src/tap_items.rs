// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use pullstream_core::StreamItem;

/// Extension trait providing the `tap_items` operator for pull streams.
pub trait TapItemsExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Runs a side effect on each value, passing every item through
    /// unchanged.
    ///
    /// Errors skip the callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::StreamExt;
    /// use pullstream_stream::{from_values, TapItemsExt};
    ///
    /// # futures::executor::block_on(async {
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// let values: Vec<i32> = from_values(vec![1, 2])
    ///     .tap_items(move |x| sink.lock().unwrap().push(*x))
    ///     .filter_map(|item| async { item.ok() })
    ///     .collect()
    ///     .await;
    /// assert_eq!(values, *seen.lock().unwrap());
    /// # });
    /// ```
    fn tap_items<F>(self, f: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&T) + Send + 'static;
}

impl<S, T> TapItemsExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn tap_items<F>(self, mut f: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        self.map(move |item| {
            if let StreamItem::Value(value) = &item {
                f(value);
            }
            item
        })
    }
}

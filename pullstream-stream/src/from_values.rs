// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, Stream};
use pullstream_core::StreamItem;

/// Builds a pull stream that yields each value in order and then ends.
///
/// Every pull resolves immediately; the stream never produces an error.
///
/// # Examples
///
/// ```
/// use futures::StreamExt;
/// use pullstream_core::StreamItem;
/// use pullstream_stream::from_values;
///
/// # futures::executor::block_on(async {
/// let mut stream = from_values(vec!["a", "b"]);
/// assert_eq!(stream.next().await, Some(StreamItem::Value("a")));
/// assert_eq!(stream.next().await, Some(StreamItem::Value("b")));
/// assert_eq!(stream.next().await, None);
/// # });
/// ```
pub fn from_values<T>(values: Vec<T>) -> impl Stream<Item = StreamItem<T>> + Unpin {
    stream::iter(values.into_iter().map(StreamItem::Value))
}

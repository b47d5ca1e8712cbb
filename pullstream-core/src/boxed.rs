// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::stream_item::StreamItem;
use futures::Stream;
use std::pin::Pin;

/// An owned, type-erased pull stream.
///
/// Ownership of the handle is what makes a pull stream single-consumer:
/// whoever holds the box is the only party that can advance it.
pub type BoxPullStream<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send>>;

/// Boxes a concrete stream into a [`BoxPullStream`].
pub fn boxed<S, T>(stream: S) -> BoxPullStream<T>
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
{
    Box::pin(stream)
}

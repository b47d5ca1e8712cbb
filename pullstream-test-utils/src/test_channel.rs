// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::mpsc::{self, UnboundedSender};
use futures::{Stream, StreamExt};
use pullstream_core::StreamItem;

/// An unbounded channel whose receiving half is a pull stream of values.
///
/// Each value sent arrives as `StreamItem::Value`; dropping the sender ends
/// the stream. Use [`test_item_channel`] to send errors too.
pub fn test_channel<T>() -> (UnboundedSender<T>, impl Stream<Item = StreamItem<T>> + Unpin) {
    let (tx, rx) = mpsc::unbounded();
    (tx, rx.map(StreamItem::Value))
}

/// An unbounded channel carrying whole [`StreamItem`]s, so a test can push
/// in-band errors at exact positions.
pub fn test_item_channel<T>() -> (
    UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Unpin,
) {
    mpsc::unbounded()
}

// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use futures::stream::StreamExt;
use futures::Stream;
use pullstream_core::{PullStreamError, StreamItem};
use tokio::time::sleep;

/// Drains the stream to exhaustion, returning the values in yield order.
///
/// # Panics
///
/// Panics if the stream yields an in-band error.
pub async fn collect_values<S, T>(stream: S) -> Vec<T>
where
    S: Stream<Item = StreamItem<T>>,
{
    stream
        .map(|item| match item {
            StreamItem::Value(value) => value,
            StreamItem::Error(error) => panic!("unexpected stream error: {error}"),
        })
        .collect()
        .await
}

pub async fn expect_next_value<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: PartialEq + std::fmt::Debug,
{
    match stream.next().await.expect("expected next item") {
        StreamItem::Value(value) => assert_eq!(value, expected),
        StreamItem::Error(error) => panic!("expected value {expected:?}, got error: {error}"),
    }
}

pub async fn expect_next_error<S, T>(stream: &mut S) -> PullStreamError
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    let item = stream.next().await.expect("expected next item");
    match item.err() {
        Some(error) => error,
        None => panic!("expected an error item, got a value"),
    }
}

/// Asserts the stream stays silent for `timeout_ms` milliseconds.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected item emitted, expected no output");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;

use futures::{stream, Stream};
use pullstream_core::{Result, StreamItem};

/// One step of a [`create_pull_stream`] callback: the value to yield and,
/// when `next` is `Some`, the state to hand to the following invocation.
/// `next: None` ends the stream after `data` is yielded.
pub struct Step<N, R> {
    pub next: Option<N>,
    pub data: R,
}

enum State<N> {
    Call(Option<N>),
    Finished,
}

/// Builds a pull stream from a stepping callback.
///
/// The callback is invoked once per pull, strictly serialized. The first
/// invocation receives `None`; every later one receives the `next` state
/// the previous step returned. Returning a `Step` with `next: None` makes
/// the current value the last; returning `Err` yields the error in-band and
/// ends the stream.
///
/// # Examples
///
/// ```
/// use futures::StreamExt;
/// use pullstream_stream::{create_pull_stream, Step};
///
/// # futures::executor::block_on(async {
/// // Counts down from 3.
/// let countdown = create_pull_stream(|state: Option<u32>| async move {
///     let current = state.unwrap_or(3);
///     Ok(Step { next: (current > 1).then(|| current - 1), data: current })
/// });
///
/// let values: Vec<u32> = countdown.filter_map(|item| async { item.ok() }).collect().await;
/// assert_eq!(values, vec![3, 2, 1]);
/// # });
/// ```
pub fn create_pull_stream<N, R, F, Fut>(callback: F) -> impl Stream<Item = StreamItem<R>>
where
    F: FnMut(Option<N>) -> Fut,
    Fut: Future<Output = Result<Step<N, R>>>,
{
    stream::unfold(
        (callback, State::Call(None)),
        |(mut callback, state)| async move {
            let input = match state {
                State::Call(input) => input,
                State::Finished => return None,
            };
            match callback(input).await {
                Ok(step) => {
                    let next_state = match step.next {
                        Some(next) => State::Call(Some(next)),
                        None => State::Finished,
                    };
                    Some((StreamItem::Value(step.data), (callback, next_state)))
                }
                Err(error) => Some((StreamItem::Error(error), (callback, State::Finished))),
            }
        },
    )
}

// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullstream_collections::{CircularQueue, MinHeap};
use pullstream_core::BoxPullStream;

/// How a merge session picks among results that are ready at the same time.
///
/// Output always reflects completion order of the underlying pulls; the
/// policy only decides the pick order when several results are buffered at
/// once, which matters to consumers that want a deterministic interleaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YieldPolicy {
    /// First completed, first yielded. The ready buffer is a FIFO
    /// [`CircularQueue`]; pick order among simultaneously-ready results is
    /// unspecified and must not be relied upon.
    #[default]
    Arrival,
    /// Lowest slot index first. The ready buffer is a [`MinHeap`] keyed by
    /// slot index, making the pick among simultaneously-ready results
    /// deterministic.
    SlotOrder,
}

/// A completed pull: the slot that finished, the stream handed back by its
/// pull future, and the value it produced. The stream rides along so the
/// slot can be re-armed the moment the result is consumed.
pub(crate) struct ReadySlot<T> {
    pub(crate) index: usize,
    pub(crate) stream: BoxPullStream<T>,
    pub(crate) value: T,
}

fn slot_index<T>(slot: &ReadySlot<T>) -> usize {
    slot.index
}

/// The merge session's buffered-results collection, backed by one of the
/// two workspace collections depending on the yield policy.
pub(crate) enum ReadyBuffer<T> {
    Arrival(CircularQueue<ReadySlot<T>>),
    SlotOrder(MinHeap<ReadySlot<T>, usize, fn(&ReadySlot<T>) -> usize>),
}

impl<T> ReadyBuffer<T> {
    /// Sized for `count` entries up front: a slot cannot complete twice
    /// without its first result being consumed, so the session never
    /// buffers more than `count` results.
    pub(crate) fn new(policy: YieldPolicy, count: usize) -> Self {
        match policy {
            YieldPolicy::Arrival => Self::Arrival(CircularQueue::with_capacity(count + 1)),
            YieldPolicy::SlotOrder => Self::SlotOrder(MinHeap::with_capacity(slot_index, count)),
        }
    }

    pub(crate) fn push(&mut self, index: usize, stream: BoxPullStream<T>, value: T) {
        let slot = ReadySlot {
            index,
            stream,
            value,
        };
        match self {
            Self::Arrival(queue) => queue.enqueue(slot),
            Self::SlotOrder(heap) => heap.push(slot),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ReadySlot<T>> {
        match self {
            Self::Arrival(queue) => queue.dequeue().ok(),
            Self::SlotOrder(heap) => heap.pop().ok(),
        }
    }
}

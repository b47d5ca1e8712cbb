// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{buffer_len, MIN_CAPACITY};
use pullstream_core::{PullStreamError, Result};

/// A growable, shrinkable FIFO queue backed by a circular power-of-two array.
///
/// Index arithmetic is a single mask, so `enqueue` and `dequeue` are
/// amortized O(1). One slot is always kept empty, which lets the two indices
/// alone distinguish "empty" from "full"; usable capacity is therefore
/// `capacity() - 1`.
///
/// The buffer doubles when a push finds it full and halves after a removal
/// that leaves it below quarter occupancy (never below [`MIN_CAPACITY`]).
/// The shrink threshold sits strictly below the grow threshold, so a
/// workload oscillating around a boundary size does not thrash.
///
/// Exclusively owned by one producer/consumer pair; wrap it in a lock for
/// anything else.
///
/// # Examples
///
/// ```
/// use pullstream_collections::CircularQueue;
///
/// let mut queue = CircularQueue::from(vec![1, 2, 3]);
/// queue.enqueue(4);
///
/// assert_eq!(queue.dequeue().unwrap(), 1);
/// assert_eq!(queue.batch_dequeue(3).unwrap(), vec![2, 3, 4]);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug)]
pub struct CircularQueue<T> {
    buf: Vec<Option<T>>,
    front: usize,
    rear: usize,
    mask: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue at the minimum capacity.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty queue sized for `request` elements.
    ///
    /// The request is rounded up to a power of two and floored at
    /// [`MIN_CAPACITY`]; a tiny request is not an error.
    pub fn with_capacity(request: usize) -> Self {
        let length = buffer_len(request);
        Self {
            buf: (0..length).map(|_| None).collect(),
            front: 0,
            rear: 0,
            mask: length - 1,
        }
    }

    /// Physical buffer length, including the one reserved slot.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements currently queued.
    pub fn len(&self) -> usize {
        (self.rear + self.buf.len() - self.front) & self.mask
    }

    /// Returns `true` if no elements are queued.
    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    fn is_full(&self) -> bool {
        (self.rear + 1) & self.mask == self.front
    }

    /// Moves the live elements into a fresh buffer of `length` slots,
    /// re-laid out from index 0.
    fn resize(&mut self, length: usize) {
        let count = self.len();
        let mut buf: Vec<Option<T>> = (0..length).map(|_| None).collect();
        for (i, slot) in buf.iter_mut().take(count).enumerate() {
            *slot = self.buf[(self.front + i) & self.mask].take();
        }
        self.buf = buf;
        self.front = 0;
        self.rear = count;
        self.mask = length - 1;
    }

    fn shrink_if_needed(&mut self) {
        let half = self.buf.len() >> 1;
        let quarter = half >> 1;
        if MIN_CAPACITY <= half && self.len() < quarter {
            self.resize(half);
        }
    }

    /// Appends an element at the rear, doubling the buffer first if full.
    /// Never fails.
    pub fn enqueue(&mut self, item: T) {
        if self.is_full() {
            self.resize(self.buf.len() << 1);
        }
        self.buf[self.rear] = Some(item);
        self.rear = (self.rear + 1) & self.mask;
    }

    /// Appends a batch of elements, resizing at most once for the whole
    /// batch.
    ///
    /// The required capacity is computed up front from the iterator's exact
    /// length, so a large batch costs one relayout instead of one per
    /// doubling.
    pub fn batch_enqueue<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = self.len();
        let available = self.buf.len() - count - 1;

        if items.len() > available {
            let mut length = self.buf.len();
            while length - count - 1 < items.len() {
                length <<= 1;
            }
            self.resize(length);
        }

        for item in items {
            self.buf[self.rear] = Some(item);
            self.rear = (self.rear + 1) & self.mask;
        }
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`PullStreamError::QueueEmpty`] if the queue holds no
    /// elements.
    pub fn dequeue(&mut self) -> Result<T> {
        match self.buf[self.front].take() {
            Some(item) => {
                self.front = (self.front + 1) & self.mask;
                self.shrink_if_needed();
                Ok(item)
            }
            None => Err(PullStreamError::queue_empty("dequeue")),
        }
    }

    /// Removes and returns the next `count` elements in FIFO order.
    ///
    /// All-or-nothing: the availability check happens before any element is
    /// moved, so a failing call leaves the queue unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PullStreamError::QueueUnderflow`] if fewer than `count`
    /// elements are present.
    pub fn batch_dequeue(&mut self, count: usize) -> Result<Vec<T>> {
        let available = self.len();
        if count > available {
            return Err(PullStreamError::underflow(count, available));
        }

        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(item) = self.buf[self.front].take() {
                items.push(item);
            }
            self.front = (self.front + 1) & self.mask;
        }

        self.shrink_if_needed();
        Ok(items)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`PullStreamError::QueueEmpty`] if the queue holds no
    /// elements.
    pub fn peek(&self) -> Result<&T> {
        self.buf[self.front]
            .as_ref()
            .ok_or_else(|| PullStreamError::queue_empty("peek"))
    }

    /// Discards all elements and resets the buffer to the minimum capacity.
    pub fn clear(&mut self) {
        self.buf = (0..MIN_CAPACITY).map(|_| None).collect();
        self.front = 0;
        self.rear = 0;
        self.mask = MIN_CAPACITY - 1;
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for CircularQueue<T> {
    /// Builds a queue pre-loaded with `items`, sized to the next power of
    /// two that fits them all plus the reserved slot.
    fn from(items: Vec<T>) -> Self {
        let mut queue = Self::with_capacity(items.len() + 1);
        let count = items.len();
        for (i, item) in items.into_iter().enumerate() {
            queue.buf[i] = Some(item);
        }
        queue.rear = count;
        queue
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

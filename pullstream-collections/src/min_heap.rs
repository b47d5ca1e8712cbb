// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{buffer_len, MIN_CAPACITY};
use pullstream_core::{PullStreamError, Result};

/// An array-backed binary min-heap keyed by a caller-supplied extraction
/// function.
///
/// The backing array is 1-indexed: slot 0 is an unused sentinel, the
/// children of slot `i` are `2i` and `2i + 1`, and for every non-root slot
/// the parent's key is less than or equal to its own. Keys are extracted
/// once on insertion and stored next to their value.
///
/// Grow and shrink mirror [`CircularQueue`](crate::CircularQueue) exactly:
/// double when full, halve when occupancy (including the sentinel) falls
/// below a quarter, never below [`MIN_CAPACITY`].
///
/// Equal keys carry no ordering guarantee between their values.
/// Exclusively owned; not thread-safe.
///
/// # Examples
///
/// ```
/// use pullstream_collections::MinHeap;
///
/// let mut heap = MinHeap::from_items(vec!["bb", "a", "ccc"], |s: &&str| s.len()).unwrap();
/// heap.push("dddd");
///
/// assert_eq!(heap.pop().unwrap(), "a");
/// assert_eq!(heap.pop().unwrap(), "bb");
/// assert_eq!(heap.peek().unwrap(), &"ccc");
/// ```
pub struct MinHeap<V, K, F = fn(&V) -> K>
where
    K: Ord,
    F: Fn(&V) -> K,
{
    buf: Vec<Option<(K, V)>>,
    len: usize,
    key: F,
}

impl<V, K, F> std::fmt::Debug for MinHeap<V, K, F>
where
    V: std::fmt::Debug,
    K: Ord + std::fmt::Debug,
    F: Fn(&V) -> K,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinHeap")
            .field("buf", &self.buf)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<V, K, F> MinHeap<V, K, F>
where
    K: Ord,
    F: Fn(&V) -> K,
{
    /// Creates an empty heap at the minimum capacity.
    pub fn new(key: F) -> Self {
        Self {
            buf: (0..MIN_CAPACITY).map(|_| None).collect(),
            len: 0,
            key,
        }
    }

    /// Creates an empty heap sized for `request` elements.
    ///
    /// The request is rounded up to a power of two (accounting for the
    /// sentinel slot) and floored at [`MIN_CAPACITY`].
    pub fn with_capacity(key: F, request: usize) -> Self {
        let length = buffer_len(request + 1);
        Self {
            buf: (0..length).map(|_| None).collect(),
            len: 0,
            key,
        }
    }

    /// Bulk-builds a heap from `items` in O(n): load everything unordered,
    /// then sift down every internal node from the last parent to the root.
    ///
    /// # Errors
    ///
    /// Returns [`PullStreamError::EmptyInput`] if `items` is empty.
    pub fn from_items(items: Vec<V>, key: F) -> Result<Self> {
        if items.is_empty() {
            return Err(PullStreamError::empty_input(
                "MinHeap::from_items requires at least one item",
            ));
        }

        let count = items.len();
        let mut heap = Self::with_capacity(key, count);
        for (i, item) in items.into_iter().enumerate() {
            let item_key = (heap.key)(&item);
            heap.buf[i + 1] = Some((item_key, item));
        }
        heap.len = count;

        for i in (1..=count / 2).rev() {
            heap.sift_down(i);
        }

        Ok(heap)
    }

    /// Physical buffer length, including the sentinel slot.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements currently on the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_full(&self) -> bool {
        self.len + 1 == self.buf.len()
    }

    /// `true` when the key at slot `a` is strictly smaller than at `b`.
    fn key_less(&self, a: usize, b: usize) -> bool {
        match (&self.buf[a], &self.buf[b]) {
            (Some((ka, _)), Some((kb, _))) => ka < kb,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 1 {
            let parent = idx >> 1;
            if !self.key_less(idx, parent) {
                break;
            }
            self.buf.swap(idx, parent);
            idx = parent;
        }
    }

    /// Restores the heap property below `idx`, preferring the left child
    /// when both children tie.
    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = idx << 1;
            let right = left + 1;
            let mut target = idx;

            if left <= self.len && self.key_less(left, target) {
                target = left;
            }
            if right <= self.len && self.key_less(right, target) {
                target = right;
            }
            if target == idx {
                break;
            }

            self.buf.swap(idx, target);
            idx = target;
        }
    }

    fn shrink_if_needed(&mut self) {
        let half = self.buf.len() >> 1;
        let quarter = half >> 1;
        // Occupancy counts the sentinel, same hysteresis band as the queue.
        if MIN_CAPACITY <= half && self.len + 1 < quarter {
            self.buf.truncate(half);
        }
    }

    /// Inserts an element, extracting its key and sifting it up into place.
    /// Doubles the buffer first if full. Never fails.
    pub fn push(&mut self, item: V) {
        if self.is_full() {
            let length = self.buf.len() << 1;
            self.buf.resize_with(length, || None);
        }

        let item_key = (self.key)(&item);
        let idx = self.len + 1;
        self.buf[idx] = Some((item_key, item));
        self.len += 1;
        self.sift_up(idx);
    }

    /// Removes and returns the minimum element.
    ///
    /// The last element replaces the root and sifts down, choosing the
    /// strictly smaller child at each level.
    ///
    /// # Errors
    ///
    /// Returns [`PullStreamError::HeapEmpty`] if the heap holds no elements.
    pub fn pop(&mut self) -> Result<V> {
        match self.buf[1].take() {
            Some((_, value)) => {
                if self.len > 1 {
                    self.buf[1] = self.buf[self.len].take();
                }
                self.len -= 1;
                if self.len > 1 {
                    self.sift_down(1);
                }
                self.shrink_if_needed();
                Ok(value)
            }
            None => Err(PullStreamError::heap_empty("pop")),
        }
    }

    /// Returns a reference to the minimum element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`PullStreamError::HeapEmpty`] if the heap holds no elements.
    pub fn peek(&self) -> Result<&V> {
        match &self.buf[1] {
            Some((_, value)) => Ok(value),
            None => Err(PullStreamError::heap_empty("peek")),
        }
    }

    /// Discards all elements and resets the buffer to the minimum capacity.
    pub fn clear(&mut self) {
        self.buf = (0..MIN_CAPACITY).map(|_| None).collect();
        self.len = 0;
    }
}

impl<V> MinHeap<V, V, fn(&V) -> V>
where
    V: Ord + Clone,
{
    /// Creates an empty heap whose values are their own keys.
    pub fn create() -> Self {
        Self::new(Clone::clone)
    }

    /// Bulk-builds a heap whose values are their own keys.
    ///
    /// # Errors
    ///
    /// Returns [`PullStreamError::EmptyInput`] if `items` is empty.
    pub fn with_items(items: Vec<V>) -> Result<Self> {
        Self::from_items(items, Clone::clone)
    }
}

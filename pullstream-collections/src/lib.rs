// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Buffering primitives for the pullstream workspace.
//!
//! Two structures share one resize discipline: power-of-two buffers that
//! double when full and halve below quarter occupancy, never dropping under
//! [`MIN_CAPACITY`]:
//!
//! - [`CircularQueue`]: amortized O(1) FIFO with single-item and batch
//!   operations. The merge engine routes its ready-results buffer through
//!   it, and `buffer_count` batches through it.
//! - [`MinHeap`]: O(log n) priority access keyed by a caller-supplied
//!   function. Backs the merge engine's deterministic slot-order yield
//!   policy.
//!
//! Both are exclusively owned, single-threaded structures; callers that
//! need sharing add their own synchronization.

mod circular_queue;
mod min_heap;

pub use circular_queue::CircularQueue;
pub use min_heap::MinHeap;

/// Smallest physical buffer either structure will allocate or shrink to.
pub const MIN_CAPACITY: usize = 32;

/// Rounds a capacity request up to a power of two, floored at
/// [`MIN_CAPACITY`].
pub(crate) fn buffer_len(request: usize) -> usize {
    request.max(MIN_CAPACITY).next_power_of_two()
}

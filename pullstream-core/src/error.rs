// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for pull-based stream processing.
//!
//! All fallible operations in the workspace surface a [`PullStreamError`].
//! Collection errors (`QueueEmpty`, `QueueUnderflow`, `HeapEmpty`,
//! `EmptyInput`) are local and synchronous: they are returned directly to the
//! caller of the failing operation and nothing is retried. `UpstreamFailure`
//! is the asynchronous kind: the merge engine captures the first failure of
//! any source stream or mapper into it and re-raises it to the consumer.
//!
//! # Examples
//!
//! ```
//! use pullstream_core::{PullStreamError, Result};
//!
//! fn next_batch() -> Result<Vec<u32>> {
//!     Err(PullStreamError::underflow(4, 1))
//! }
//!
//! let err = next_batch().unwrap_err();
//! assert!(err.is_queue_underflow());
//! ```

/// Root error type for all pullstream operations.
#[derive(Debug, thiserror::Error)]
pub enum PullStreamError {
    /// A queue removal or peek was attempted with zero logical elements.
    #[error("queue is empty, cannot {context}")]
    QueueEmpty {
        /// The operation that found the queue empty
        context: String,
    },

    /// A batch removal asked for more elements than the queue holds.
    ///
    /// The queue is left unmutated; the check happens before any element
    /// is moved.
    #[error("cannot dequeue {requested} items, only {available} available")]
    QueueUnderflow {
        /// Number of items the caller asked for
        requested: usize,
        /// Number of items actually present
        available: usize,
    },

    /// A heap removal or peek was attempted with zero logical elements.
    #[error("heap is empty, cannot {context}")]
    HeapEmpty {
        /// The operation that found the heap empty
        context: String,
    },

    /// A bulk constructor was called with a zero-length input.
    #[error("empty input: {context}")]
    EmptyInput {
        /// Description of the offending argument
        context: String,
    },

    /// A source stream or a mapper function failed inside the merge engine.
    ///
    /// The first failure observed wins; failures from other in-flight
    /// operations are discarded, not aggregated.
    #[error("upstream failure: {source}")]
    UpstreamFailure {
        /// The underlying failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PullStreamError {
    /// Create a `QueueEmpty` error naming the failing operation.
    pub fn queue_empty(context: impl Into<String>) -> Self {
        Self::QueueEmpty {
            context: context.into(),
        }
    }

    /// Create a `QueueUnderflow` error from the requested and available counts.
    pub fn underflow(requested: usize, available: usize) -> Self {
        Self::QueueUnderflow {
            requested,
            available,
        }
    }

    /// Create a `HeapEmpty` error naming the failing operation.
    pub fn heap_empty(context: impl Into<String>) -> Self {
        Self::HeapEmpty {
            context: context.into(),
        }
    }

    /// Create an `EmptyInput` error describing the offending argument.
    pub fn empty_input(context: impl Into<String>) -> Self {
        Self::EmptyInput {
            context: context.into(),
        }
    }

    /// Wrap an arbitrary failure from a source stream or mapper.
    pub fn upstream(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UpstreamFailure {
            source: Box::new(source),
        }
    }

    /// Create an `UpstreamFailure` from a plain message.
    ///
    /// Convenient in tests and for mappers that have no structured error of
    /// their own.
    pub fn upstream_context(context: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            source: context.into().into(),
        }
    }

    /// Returns `true` for the `QueueEmpty` variant.
    pub const fn is_queue_empty(&self) -> bool {
        matches!(self, Self::QueueEmpty { .. })
    }

    /// Returns `true` for the `QueueUnderflow` variant.
    pub const fn is_queue_underflow(&self) -> bool {
        matches!(self, Self::QueueUnderflow { .. })
    }

    /// Returns `true` for the `HeapEmpty` variant.
    pub const fn is_heap_empty(&self) -> bool {
        matches!(self, Self::HeapEmpty { .. })
    }

    /// Returns `true` for the `EmptyInput` variant.
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Returns `true` for the `UpstreamFailure` variant.
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::UpstreamFailure { .. })
    }
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, PullStreamError>;

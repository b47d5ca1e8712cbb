// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::PullStreamError;

/// A stream item that is either a value or an in-band error.
///
/// Pull streams carry failures as items rather than through a separate
/// channel, following Rx-style error semantics: operators forward errors
/// unchanged, and the merge engine treats the first error it observes as
/// terminal for the whole merged stream. Stream exhaustion is the ordinary
/// `None` returned by [`futures::Stream`].
///
/// # Examples
///
/// ```
/// use pullstream_core::StreamItem;
///
/// let item = StreamItem::Value(5);
/// assert!(item.is_value());
/// assert!(!item.is_error());
/// assert_eq!(item.ok(), Some(5));
/// ```
#[derive(Debug)]
pub enum StreamItem<T> {
    /// A successful value
    Value(T),
    /// An error travelling through the stream
    Error(PullStreamError),
}

impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            // Errors are never equal
            _ => false,
        }
    }
}

impl<T> StreamItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Converts into `Option<T>`, discarding an error.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// Converts into `Option<PullStreamError>`, discarding a value.
    pub fn err(self) -> Option<PullStreamError> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(e) => Some(e),
        }
    }

    /// Maps the contained value, propagating errors unchanged.
    pub fn map<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

}

impl<T> From<crate::Result<T>> for StreamItem<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(v) => StreamItem::Value(v),
            Err(e) => StreamItem::Error(e),
        }
    }
}

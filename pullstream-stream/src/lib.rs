// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Generators and one-to-one operators for pull streams.
//!
//! Everything here produces or consumes streams of
//! [`StreamItem`](pullstream_core::StreamItem), the workspace's in-band
//! value-or-error element. Generators ([`from_values`], [`concat`],
//! [`create_pull_stream`]) build streams from plain data or from a stepping
//! callback; the extension traits ([`MapItemsExt`], [`FilterItemsExt`],
//! [`TapItemsExt`], [`FlatItemsExt`], [`BufferCountExt`], [`MapErrorExt`])
//! rewrite one stream into another without any concurrency of their own.
//!
//! Operators pass errors through untouched (except [`map_error`]
//! (MapErrorExt::map_error), whose whole job is the error); none of them
//! swallow or reorder values.
//!
//! # Examples
//!
//! ```
//! use futures::StreamExt;
//! use pullstream_stream::{from_values, FilterItemsExt, MapItemsExt};
//!
//! # futures::executor::block_on(async {
//! let doubled_evens: Vec<i32> = from_values(vec![1, 2, 3, 4])
//!     .filter_items(|x| x % 2 == 0)
//!     .map_items(|x| x * 2)
//!     .filter_map(|item| async { item.ok() })
//!     .collect()
//!     .await;
//! assert_eq!(doubled_evens, vec![4, 8]);
//! # });
//! ```

mod buffer_count;
mod concat;
mod create;
mod filter_items;
mod flat_items;
mod from_values;
mod map_error;
mod map_items;
mod tap_items;

pub use buffer_count::{BufferCount, BufferCountExt};
pub use concat::concat;
pub use create::{create_pull_stream, Step};
pub use filter_items::FilterItemsExt;
pub use flat_items::FlatItemsExt;
pub use from_values::from_values;
pub use map_error::{MapError, MapErrorExt};
pub use map_items::MapItemsExt;
pub use tap_items::TapItemsExt;

// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Write timestamps for the versioning layer.
//!
//! Each write is stamped with a [`Timestamp`] drawn from a [`TimestampSource`].
//! Two sources are available:
//!
//! - **Monotonic**: wall clock seeded counter, bumped by one nanosecond on
//!   collision. Strictly increasing, so every version key is unique.
//! - **Wall clock**: raw system time. Two writes inside one clock tick get the
//!   same timestamp and the later overwrites the earlier version.
//!
//! # Example
//!
//! ```
//! use histkv::time::{create_timestamp_source, ClockSource, TimestampSource};
//!
//! let source = create_timestamp_source(ClockSource::Monotonic);
//! let t1 = source.next();
//! let t2 = source.next();
//! assert!(t2 > t1);
//! ```

mod clock_source;
mod monotonic;
mod timestamp;
mod traits;
mod wall;

use std::sync::Arc;

pub use clock_source::ClockSource;
pub use monotonic::MonotonicClock;
pub use timestamp::{TimeRank, Timestamp};
pub use traits::TimestampSource;
pub use wall::WallClock;

/// Creates a shared timestamp source of the requested kind.
pub fn create_timestamp_source(source: ClockSource) -> Arc<dyn TimestampSource> {
    match source {
        ClockSource::Monotonic => Arc::new(MonotonicClock::new()),
        ClockSource::WallClock => Arc::new(WallClock::new()),
    }
}

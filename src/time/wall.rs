// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Raw wall-clock timestamp source.
//!
//! Only correct when no two writes to the same key can land inside one clock
//! tick. Collisions are logged, never corrected.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use super::{ClockSource, Timestamp, TimestampSource};

/// Timestamp source that returns the system clock reading unchanged.
#[derive(Debug, Default)]
pub struct WallClock {
    last: AtomicU64,
}

impl WallClock {
    /// Creates a new wall-clock source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimestampSource for WallClock {
    fn next(&self) -> Timestamp {
        let now = Timestamp::now();
        let previous = self.last.fetch_max(now.as_nanos(), Ordering::AcqRel);

        if now.as_nanos() <= previous {
            warn!(
                now = now.as_nanos(),
                previous,
                "wall clock did not advance; versions written at this timestamp may collide"
            );
        }

        now
    }

    #[inline]
    fn source_type(&self) -> ClockSource {
        ClockSource::WallClock
    }
}

// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Monotonic timestamp counter seeded from the wall clock.
//!
//! Follows physical time while it advances and falls back to a logical bump
//! of one nanosecond when it stalls or steps backwards, so every call returns
//! a distinct, strictly larger timestamp.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{ClockSource, Timestamp, TimestampSource};

type PhysicalClock = Box<dyn Fn() -> Timestamp + Send + Sync>;

/// Strictly increasing timestamp source.
///
/// Guarantees that each call to `next()` returns a timestamp greater than all
/// previous calls, even under concurrent access.
pub struct MonotonicClock {
    last: AtomicU64,
    physical: PhysicalClock,
}

impl MonotonicClock {
    /// Creates a counter that follows the system wall clock.
    pub fn new() -> Self {
        Self::with_physical_clock(Timestamp::now)
    }

    /// Creates a counter driven by a custom physical clock.
    pub fn with_physical_clock<F>(physical: F) -> Self
    where
        F: Fn() -> Timestamp + Send + Sync + 'static,
    {
        Self {
            last: AtomicU64::new(0),
            physical: Box::new(physical),
        }
    }

    /// Returns the most recently issued timestamp, or [`Timestamp::MIN`] if none.
    pub fn last_issued(&self) -> Timestamp {
        Timestamp::from_nanos(self.last.load(Ordering::Acquire))
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MonotonicClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonotonicClock")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl TimestampSource for MonotonicClock {
    fn next(&self) -> Timestamp {
        loop {
            let physical = (self.physical)().as_nanos();
            let last = self.last.load(Ordering::Acquire);
            let new_ts = physical.max(last.saturating_add(1));

            match self
                .last
                .compare_exchange(last, new_ts, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return Timestamp::from_nanos(new_ts),
                Err(_) => continue,
            }
        }
    }

    #[inline]
    fn source_type(&self) -> ClockSource {
        ClockSource::Monotonic
    }
}

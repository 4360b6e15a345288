// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Timestamp source identification.

/// Identifies how write timestamps are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockSource {
    /// Wall clock seeded counter, bumped on collision. Strictly increasing.
    #[default]
    Monotonic,
    /// Raw wall clock readings.
    ///
    /// Two writes landing in the same clock tick receive the same timestamp,
    /// so a later version of a key can silently replace an earlier one.
    WallClock,
}

impl ClockSource {
    /// Returns true if this source guarantees strictly increasing timestamps.
    #[inline]
    pub fn is_strictly_monotonic(&self) -> bool {
        matches!(self, ClockSource::Monotonic)
    }

    /// Returns a human-readable name for this clock source.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ClockSource::Monotonic => "monotonic",
            ClockSource::WallClock => "wall-clock",
        }
    }
}

impl std::fmt::Display for ClockSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

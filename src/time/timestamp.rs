// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Point-in-time timestamps and their sign-inverted sort rank.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A moment in time, in nanoseconds since the Unix epoch.
///
/// Every write is stamped with one of these. Point-in-time reads take them as
/// window bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The earliest representable moment.
    pub const MIN: Timestamp = Timestamp(0);

    /// The latest representable moment.
    pub const MAX: Timestamp = Timestamp(u64::MAX);

    /// Creates a timestamp from nanoseconds since the Unix epoch.
    #[inline]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    /// Reads the system wall clock.
    ///
    /// A clock set before the epoch reads as [`Timestamp::MIN`].
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| Self(d.as_nanos() as u64))
            .unwrap_or(Self::MIN)
    }

    /// Returns nanoseconds since the Unix epoch.
    #[inline]
    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Returns the sign-inverted rank used as the secondary sort component of
    /// version keys.
    #[inline]
    pub const fn rank(&self) -> TimeRank {
        TimeRank(u64::MAX - self.0)
    }

    /// Returns the timestamp one nanosecond later, saturating at [`Timestamp::MAX`].
    #[inline]
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the duration elapsed since `earlier`, or zero if `earlier` is later.
    #[inline]
    pub fn duration_since(&self, earlier: Timestamp) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        time.duration_since(UNIX_EPOCH)
            .map(|d| Self(d.as_nanos() as u64))
            .unwrap_or(Self::MIN)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

/// A sign-inverted timestamp: `u64::MAX - nanos`.
///
/// Later timestamps have smaller ranks, so big-endian encoded ranks sort the
/// most recent version first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRank(u64);

impl TimeRank {
    /// Wraps a raw rank value as read back from an encoded key.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw rank value.
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Recovers the timestamp this rank was derived from.
    #[inline]
    pub const fn timestamp(&self) -> Timestamp {
        Timestamp(u64::MAX - self.0)
    }

    /// Returns the big-endian encoding of the rank.
    #[inline]
    pub const fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

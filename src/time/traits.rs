// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! TimestampSource trait definition.

use super::{ClockSource, Timestamp};

/// Produces the timestamp stamped onto each write.
///
/// Implementations are shared across threads; `next()` is the only mutable
/// state in the versioning layer.
pub trait TimestampSource: Send + Sync {
    /// Returns the timestamp for the next write.
    ///
    /// Never fails. Strictly monotonic sources return a value greater than
    /// every value previously returned by the same instance.
    fn next(&self) -> Timestamp;

    /// Returns the clock source type for diagnostics.
    fn source_type(&self) -> ClockSource;
}

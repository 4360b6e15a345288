// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the versioned store.

use crate::time::ClockSource;

/// Configuration for [`VersionedStore`](super::VersionedStore) construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedConfig {
    /// Maintain a live pointer per key for direct current-value reads.
    ///
    /// Without it every read scans version history.
    pub live_pointer: bool,
    /// Where write timestamps come from.
    pub clock: ClockSource,
}

impl Default for VersionedConfig {
    fn default() -> Self {
        Self {
            live_pointer: true,
            clock: ClockSource::Monotonic,
        }
    }
}

impl VersionedConfig {
    /// Live pointer plus monotonic counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// History-only layout: no live pointer, reads always scan.
    pub fn scan_only() -> Self {
        Self::default().with_live_pointer(false)
    }

    /// Enables or disables the live pointer.
    pub fn with_live_pointer(mut self, enabled: bool) -> Self {
        self.live_pointer = enabled;
        self
    }

    /// Selects the timestamp source.
    pub fn with_clock(mut self, clock: ClockSource) -> Self {
        self.clock = clock;
        self
    }
}

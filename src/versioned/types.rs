// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Request and record types for the versioned store.

use crate::storage::{Key, Value};
use crate::time::Timestamp;

/// One logical operation in a [`VersionedStore::batch`](super::VersionedStore::batch) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOp {
    /// Write a new value for `key`.
    Put { key: Key, value: Value },
    /// Logically delete `key`.
    Delete { key: Key },
}

impl BatchOp {
    /// Creates a put operation.
    pub fn put(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        BatchOp::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a delete operation.
    pub fn delete(key: impl Into<Key>) -> Self {
        BatchOp::Delete { key: key.into() }
    }

    /// Returns the logical key this operation targets.
    #[inline]
    pub fn key(&self) -> &Key {
        match self {
            BatchOp::Put { key, .. } | BatchOp::Delete { key } => key,
        }
    }
}

/// One immutable entry in a key's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub key: Key,
    pub timestamp: Timestamp,
    pub value: Option<Value>, // None = tombstone
}

impl VersionRecord {
    /// Returns true if this record is a tombstone.
    #[inline]
    pub fn is_tombstone(&self) -> bool {
        self.value.is_none()
    }
}

/// Time window for a read.
///
/// Both bounds are inclusive. With neither bound set the read resolves to the
/// current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Earliest write to consider. `None` means the unbounded past.
    pub from_time: Option<Timestamp>,
    /// Latest write to consider. `None` means now.
    pub to_time: Option<Timestamp>,
}

impl GetOptions {
    /// Reads the current value.
    pub fn latest() -> Self {
        Self::default()
    }

    /// Reads the state as of `ts`.
    pub fn as_of(ts: Timestamp) -> Self {
        Self::default().to_time(ts)
    }

    /// Ignores writes before `ts`.
    pub fn from_time(mut self, ts: Timestamp) -> Self {
        self.from_time = Some(ts);
        self
    }

    /// Ignores writes after `ts`.
    pub fn to_time(mut self, ts: Timestamp) -> Self {
        self.to_time = Some(ts);
        self
    }

    /// Returns true if no window bound is set.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.from_time.is_none() && self.to_time.is_none()
    }

    /// Returns the inclusive `(from, to)` window with defaults filled in.
    #[inline]
    pub fn window(&self) -> (Timestamp, Timestamp) {
        (
            self.from_time.unwrap_or(Timestamp::MIN),
            self.to_time.unwrap_or(Timestamp::MAX),
        )
    }
}

/// Per-call write options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Fsync before returning, regardless of the store's durability mode.
    pub sync: bool,
}

impl WriteOptions {
    /// Options requesting an fsync'd write.
    pub fn sync() -> Self {
        Self { sync: true }
    }
}

// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Point-in-time resolution over a key's version history.

use crate::storage::{Key, OrderedStore, StorageError, Value};
use crate::time::Timestamp;

use super::codec::{decode_version_key, history_bounds, range_bounds, VersionKey};
use super::VersionRecord;

/// Outcome of resolving a key against a time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The latest write in the window carried a value.
    Found { value: Value, timestamp: Timestamp },
    /// The latest write in the window was a delete.
    Deleted { timestamp: Timestamp },
    /// No write to the key falls inside the window.
    Absent,
}

impl Resolution {
    /// Returns the resolved value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Resolution::Found { value, .. } => Some(value),
            Resolution::Deleted { .. } | Resolution::Absent => None,
        }
    }
}

/// Scans version records of one key in ascending encoded order.
///
/// Ascending order is most-recent-first, so the first record inside the
/// window is the answer and the scan stops there.
pub struct RangeResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: OrderedStore + ?Sized> RangeResolver<'a, S> {
    /// Creates a resolver over `store`.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolves `key` to its latest write with timestamp in `from..=to`.
    pub fn resolve(
        &self,
        key: &Key,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Resolution, StorageError> {
        if from > to {
            return Ok(Resolution::Absent);
        }

        let (start, end) = range_bounds(key, from, to);
        let mut iter = self.store.scan(&start, &end)?;

        let Some(item) = iter.next() else {
            return Ok(Resolution::Absent);
        };

        let (encoded_key, value) = item?;
        let version = decode_owned(key, &encoded_key)?;

        if version.is_live {
            Ok(Resolution::Found {
                value: Value::new(value),
                timestamp: version.timestamp(),
            })
        } else {
            Ok(Resolution::Deleted {
                timestamp: version.timestamp(),
            })
        }
    }

    /// Returns every version record of `key`, most recent first.
    pub fn history(&self, key: &Key) -> Result<Vec<VersionRecord>, StorageError> {
        let (start, end) = history_bounds(key);
        let mut records = Vec::new();

        for item in self.store.scan(&start, &end)? {
            let (encoded_key, value) = item?;
            let version = decode_owned(key, &encoded_key)?;

            let timestamp = version.timestamp();
            records.push(VersionRecord {
                key: version.key,
                timestamp,
                value: version.is_live.then(|| Value::new(value)),
            });
        }

        Ok(records)
    }
}

/// Decodes a scanned key and checks it belongs to `key`.
fn decode_owned(key: &Key, encoded: &[u8]) -> Result<VersionKey, StorageError> {
    let version = decode_version_key(encoded)?;
    if version.key != *key {
        return Err(StorageError::Corruption(format!(
            "scan for key {} returned version of key {}",
            key, version.key
        )));
    }
    Ok(version)
}

// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! The ordered key-value store contract the versioning layer is built on.

use super::{StorageError, WriteOp};

/// A raw key-value pair yielded by a range scan.
pub type KvPair = (Vec<u8>, Vec<u8>);

/// Ascending iterator over a scanned range.
pub type KvIter<'a> = Box<dyn Iterator<Item = Result<KvPair, StorageError>> + 'a>;

/// An ordered byte keyspace with point reads, atomic batches, and range scans.
///
/// Keys sort by unsigned lexicographic byte order. Implementations must be
/// safe to share across threads.
pub trait OrderedStore: Send + Sync {
    /// Reads the value stored at `key`.
    ///
    /// Returns `None` if the key does not exist.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Atomically applies every operation in order, or none of them.
    ///
    /// When `sync` is true the write is durable against power loss before
    /// this returns.
    fn write(&self, ops: Vec<WriteOp>, sync: bool) -> Result<(), StorageError>;

    /// Scans keys in `[start, end)` in ascending order.
    ///
    /// An empty iterator is returned when `start >= end`.
    fn scan<'a>(&'a self, start: &[u8], end: &[u8]) -> Result<KvIter<'a>, StorageError>;

    /// Inserts or overwrites a single key.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        self.write(
            vec![WriteOp::Put {
                key: key.to_vec(),
                value: value.to_vec(),
            }],
            false,
        )
    }

    /// Removes a single key.
    fn delete(&self, key: &[u8]) -> Result<(), StorageError> {
        self.write(vec![WriteOp::Delete { key: key.to_vec() }], false)
    }
}

// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! In-memory ordered store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{KvIter, KvPair, OrderedStore, StorageError, WriteOp};

/// A `BTreeMap`-backed ordered store.
///
/// Batches are applied under a single write guard, so readers observe either
/// none or all of a batch. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of raw entries held.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl OrderedStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn write(&self, ops: Vec<WriteOp>, _sync: bool) -> Result<(), StorageError> {
        let mut data = self.data.write();
        for op in ops {
            match op {
                WriteOp::Put { key, value } => {
                    data.insert(key, value);
                }
                WriteOp::Delete { key } => {
                    data.remove(&key);
                }
            }
        }
        Ok(())
    }

    fn scan<'a>(&'a self, start: &[u8], end: &[u8]) -> Result<KvIter<'a>, StorageError> {
        if start >= end {
            return Ok(Box::new(std::iter::empty()));
        }

        // Snapshot the range so the read guard is not held across iteration.
        let entries: Vec<Result<KvPair, StorageError>> = self
            .data
            .read()
            .range(start.to_vec()..end.to_vec())
            .map(|(k, v)| Ok((k.clone(), v.clone())))
            .collect();

        Ok(Box::new(entries.into_iter()))
    }
}

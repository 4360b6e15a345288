// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Ordered key-value stores underneath the versioning layer.
//!
//! The versioning layer only needs three primitives from a store: point
//! lookups, atomic batches, and ascending range scans over a bytewise-ordered
//! keyspace. [`OrderedStore`] captures that contract; [`MemoryStore`] and
//! [`RocksStore`] implement it.
//!
//! # Example
//!
//! ```no_run
//! use histkv::storage::{OrderedStore, RocksStore, WriteOp};
//! use std::path::Path;
//!
//! let store = RocksStore::open(Path::new("/tmp/histkv")).unwrap();
//!
//! store.write(vec![
//!     WriteOp::Put { key: b"a".to_vec(), value: b"1".to_vec() },
//!     WriteOp::Put { key: b"b".to_vec(), value: b"2".to_vec() },
//! ], false).unwrap();
//!
//! for item in store.scan(b"a", b"c").unwrap() {
//!     let (key, value) = item.unwrap();
//!     println!("{:?} => {:?}", key, value);
//! }
//! ```

mod engine;
mod error;
mod memory;
mod rocks;
mod types;

pub use engine::{KvIter, KvPair, OrderedStore};
pub use error::StorageError;
pub use memory::MemoryStore;
pub use rocks::{DurabilityMode, RocksStore};
pub use types::{Key, Value, WriteOp, MAX_KEY_SIZE, MAX_VALUE_SIZE};

// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Multi-version, time-travel key-value layer.
//!
//! Writes never overwrite history. Each put or delete appends a version
//! record keyed by `(logical key, inverted timestamp, is_live)`, so a
//! forward scan over one key's records visits them most-recent-first.
//!
//! # Key Concepts
//!
//! - **Version record**: immutable `(key, rank, is_live) -> value` entry.
//!   Deletes write a tombstone (`is_live = false`, empty payload).
//! - **Live pointer**: optional `key -> value` entry mirroring the latest
//!   record, so current-value reads are a single point lookup.
//! - **Point-in-time read**: a [`GetOptions`] window; resolved by scanning
//!   the window and taking the first record found.
//! - **Batch**: every member shares one timestamp, so no time boundary ever
//!   falls inside a batch.
//!
//! # Example
//!
//! ```
//! use histkv::storage::{Key, Value};
//! use histkv::versioned::{BatchOp, GetOptions, VersionedConfig, VersionedStore};
//!
//! let store = VersionedStore::in_memory(VersionedConfig::default());
//! let key = Key::from("eugene");
//!
//! let t1 = store.put(key.clone(), Value::from("blue")).unwrap();
//! store.put(key.clone(), Value::from("black")).unwrap();
//! store.delete(key.clone()).unwrap();
//!
//! assert!(store.get_latest(&key).unwrap_err().is_not_found());
//! assert_eq!(store.get(&key, &GetOptions::as_of(t1)).unwrap(), Value::from("blue"));
//!
//! store.batch(vec![BatchOp::put("a", "1"), BatchOp::delete("b")]).unwrap();
//! ```

pub mod codec;
mod config;
mod error;
mod resolver;
mod store;
mod types;

pub use codec::VersionKey;
pub use config::VersionedConfig;
pub use error::VersionError;
pub use resolver::{RangeResolver, Resolution};
pub use store::VersionedStore;
pub use types::{BatchOp, GetOptions, VersionRecord, WriteOptions};

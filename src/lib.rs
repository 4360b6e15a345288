// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! histkv: multi-version, time-travel semantics over an ordered key-value store
//!
//! Every write is kept as a new version instead of replacing history, so any
//! past state of a key can be read back as of a given moment while the latest
//! value stays a single point lookup.

pub mod storage;
pub mod time;
pub mod versioned;

pub use storage::{
    DurabilityMode, Key, MemoryStore, OrderedStore, RocksStore, StorageError, Value, WriteOp,
};
pub use time::{
    create_timestamp_source, ClockSource, MonotonicClock, TimeRank, Timestamp, TimestampSource,
    WallClock,
};
pub use versioned::{
    BatchOp, GetOptions, RangeResolver, Resolution, VersionError, VersionRecord, VersionedConfig,
    VersionedStore, WriteOptions,
};

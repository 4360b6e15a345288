// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! The versioned store: put, get, delete, and batch over an ordered store.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::storage::{
    DurabilityMode, Key, MemoryStore, OrderedStore, RocksStore, StorageError, Value, WriteOp,
    MAX_KEY_SIZE, MAX_VALUE_SIZE,
};
use crate::time::{create_timestamp_source, Timestamp, TimestampSource};

use super::codec::{encode_live_key, encode_version_key};
use super::resolver::{RangeResolver, Resolution};
use super::{BatchOp, GetOptions, VersionError, VersionRecord, VersionedConfig, WriteOptions};

/// Multi-version key-value store.
///
/// Every write appends an immutable version record stamped with a fresh
/// timestamp. Each public write maps to exactly one atomic write on the
/// underlying store.
pub struct VersionedStore<S: OrderedStore> {
    store: Arc<S>,
    clock: Arc<dyn TimestampSource>,
    config: VersionedConfig,
}

impl<S: OrderedStore> VersionedStore<S> {
    /// Creates a store with the default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, VersionedConfig::default())
    }

    /// Creates a store with the given configuration.
    pub fn with_config(store: Arc<S>, config: VersionedConfig) -> Self {
        let clock = create_timestamp_source(config.clock);
        Self::with_timestamp_source(store, config, clock)
    }

    /// Creates a store drawing timestamps from `clock`.
    ///
    /// `config.clock` is ignored; the source reports its own type.
    pub fn with_timestamp_source(
        store: Arc<S>,
        config: VersionedConfig,
        clock: Arc<dyn TimestampSource>,
    ) -> Self {
        let source = clock.source_type();
        if !source.is_strictly_monotonic() {
            warn!(
                clock = %source,
                "timestamp source is not strictly monotonic; rapid writes to one key can overwrite history"
            );
        }

        info!(
            clock = %source,
            live_pointer = config.live_pointer,
            "Created versioned store"
        );

        Self {
            store,
            clock,
            config,
        }
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &VersionedConfig {
        &self.config
    }

    /// Returns the timestamp source.
    pub fn timestamp_source(&self) -> &dyn TimestampSource {
        self.clock.as_ref()
    }

    /// Returns the underlying ordered store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Writes a new version of `key`. Returns the version's timestamp.
    pub fn put(&self, key: Key, value: Value) -> Result<Timestamp, VersionError> {
        self.put_with(key, value, &WriteOptions::default())
    }

    /// Writes a new version of `key` with explicit write options.
    #[instrument(level = "debug", skip_all, fields(key = %key))]
    pub fn put_with(
        &self,
        key: Key,
        value: Value,
        opts: &WriteOptions,
    ) -> Result<Timestamp, VersionError> {
        validate_key(&key)?;
        validate_value(&value)?;

        let ts = self.clock.next();
        let mut ops = Vec::with_capacity(2);
        self.push_put(&mut ops, &key, value, ts);

        self.commit(ops, opts, ts)?;
        Ok(ts)
    }

    /// Logically deletes `key`. History is kept; only forward visibility
    /// changes. Returns the tombstone's timestamp.
    pub fn delete(&self, key: Key) -> Result<Timestamp, VersionError> {
        self.delete_with(key, &WriteOptions::default())
    }

    /// Logically deletes `key` with explicit write options.
    #[instrument(level = "debug", skip_all, fields(key = %key))]
    pub fn delete_with(&self, key: Key, opts: &WriteOptions) -> Result<Timestamp, VersionError> {
        validate_key(&key)?;

        let ts = self.clock.next();
        let mut ops = Vec::with_capacity(2);
        self.push_delete(&mut ops, &key, ts);

        self.commit(ops, opts, ts)?;
        Ok(ts)
    }

    /// Applies every operation atomically under one shared timestamp.
    ///
    /// No point-in-time read can observe some members of the batch without
    /// the others. Operations naming the same key collapse to the last one.
    pub fn batch(&self, ops: Vec<BatchOp>) -> Result<Timestamp, VersionError> {
        self.batch_with(ops, &WriteOptions::default())
    }

    /// Applies a batch with explicit write options.
    #[instrument(level = "debug", skip_all, fields(ops = ops.len()))]
    pub fn batch_with(
        &self,
        ops: Vec<BatchOp>,
        opts: &WriteOptions,
    ) -> Result<Timestamp, VersionError> {
        for op in &ops {
            validate_key(op.key())?;
            if let BatchOp::Put { value, .. } = op {
                validate_value(value)?;
            }
        }

        let ts = self.clock.next();
        if ops.is_empty() {
            return Ok(ts);
        }

        // One version record per key per timestamp: keep each key's last op
        let mut last_index: HashMap<&Key, usize> = HashMap::with_capacity(ops.len());
        for (i, op) in ops.iter().enumerate() {
            last_index.insert(op.key(), i);
        }
        let keep: Vec<bool> = ops
            .iter()
            .enumerate()
            .map(|(i, op)| last_index.get(op.key()) == Some(&i))
            .collect();

        let mut writes = Vec::with_capacity(ops.len() * 2);
        for (op, keep) in ops.into_iter().zip(keep) {
            if !keep {
                continue;
            }
            match op {
                BatchOp::Put { key, value } => self.push_put(&mut writes, &key, value, ts),
                BatchOp::Delete { key } => self.push_delete(&mut writes, &key, ts),
            }
        }

        self.commit(writes, opts, ts)?;
        Ok(ts)
    }

    /// Reads `key`.
    ///
    /// With no window set, returns the current value. Otherwise returns the
    /// latest value written within the inclusive window. Fails with
    /// [`VersionError::NotFound`] if that write was a delete or nothing was
    /// written in the window.
    #[instrument(level = "debug", skip(self, key), fields(key = %key))]
    pub fn get(&self, key: &Key, opts: &GetOptions) -> Result<Value, VersionError> {
        validate_key(key)?;

        if opts.is_current() && self.config.live_pointer {
            return match self.store.get(&encode_live_key(key))? {
                Some(value) => Ok(Value::new(value)),
                None => Err(VersionError::NotFound { key: key.clone() }),
            };
        }

        let (from, to) = opts.window();
        match RangeResolver::new(self.store.as_ref()).resolve(key, from, to)? {
            Resolution::Found { value, timestamp } => {
                debug!(ts = timestamp.as_nanos(), "resolved version");
                Ok(value)
            }
            Resolution::Deleted { timestamp } => {
                debug!(ts = timestamp.as_nanos(), "resolved to tombstone");
                Err(VersionError::NotFound { key: key.clone() })
            }
            Resolution::Absent => Err(VersionError::NotFound { key: key.clone() }),
        }
    }

    /// Reads the current value of `key`.
    pub fn get_latest(&self, key: &Key) -> Result<Value, VersionError> {
        self.get(key, &GetOptions::latest())
    }

    /// Returns every version record of `key`, most recent first.
    pub fn history(&self, key: &Key) -> Result<Vec<VersionRecord>, VersionError> {
        validate_key(key)?;
        Ok(RangeResolver::new(self.store.as_ref()).history(key)?)
    }

    fn push_put(&self, ops: &mut Vec<WriteOp>, key: &Key, value: Value, ts: Timestamp) {
        if self.config.live_pointer {
            ops.push(WriteOp::Put {
                key: encode_live_key(key),
                value: value.as_bytes().to_vec(),
            });
        }
        ops.push(WriteOp::Put {
            key: encode_version_key(key, ts, true),
            value: value.into_bytes(),
        });
    }

    fn push_delete(&self, ops: &mut Vec<WriteOp>, key: &Key, ts: Timestamp) {
        if self.config.live_pointer {
            ops.push(WriteOp::Delete {
                key: encode_live_key(key),
            });
        }
        ops.push(WriteOp::Put {
            key: encode_version_key(key, ts, false),
            value: Vec::new(),
        });
    }

    fn commit(
        &self,
        ops: Vec<WriteOp>,
        opts: &WriteOptions,
        ts: Timestamp,
    ) -> Result<(), VersionError> {
        let count = ops.len();
        if let Err(e) = self.store.write(ops, opts.sync) {
            warn!(ts = ts.as_nanos(), error = %e, "versioned write rejected");
            return Err(e.into());
        }

        debug!(ts = ts.as_nanos(), ops = count, sync = opts.sync, "committed versioned write");
        Ok(())
    }
}

impl VersionedStore<MemoryStore> {
    /// Creates a versioned store over a fresh in-memory store.
    pub fn in_memory(config: VersionedConfig) -> Self {
        Self::with_config(Arc::new(MemoryStore::new()), config)
    }
}

impl VersionedStore<RocksStore> {
    /// Opens or creates a RocksDB-backed versioned store at `path`.
    pub fn open(
        path: &Path,
        durability: DurabilityMode,
        config: VersionedConfig,
    ) -> Result<Self, StorageError> {
        let store = RocksStore::open_with_durability(path, durability)?;
        Ok(Self::with_config(Arc::new(store), config))
    }
}

/// Validates key size.
fn validate_key(key: &Key) -> Result<(), StorageError> {
    if key.len() > MAX_KEY_SIZE {
        return Err(StorageError::KeyTooLarge {
            size: key.len(),
            max: MAX_KEY_SIZE,
        });
    }
    Ok(())
}

/// Validates value size.
fn validate_value(value: &Value) -> Result<(), StorageError> {
    if value.len() > MAX_VALUE_SIZE {
        return Err(StorageError::ValueTooLarge {
            size: value.len(),
            max: MAX_VALUE_SIZE,
        });
    }
    Ok(())
}

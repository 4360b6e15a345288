// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! RocksDB-backed ordered store.

use std::path::Path;

use rocksdb::{
    DBWithThreadMode, Direction, IteratorMode, MultiThreaded, Options, ReadOptions, WriteBatch,
    WriteOptions,
};
use tracing::info;

use super::{KvIter, OrderedStore, StorageError, WriteOp};

/// Durability mode for write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurabilityMode {
    /// Writes are synced to WAL but not fsynced to disk.
    /// Durable against process crashes but not power failures.
    /// This is the default mode, balancing performance and safety.
    #[default]
    WalOnly,
    /// Writes are fsynced to disk on every operation.
    /// Durable against power failures but slower.
    FsyncEveryWrite,
}

/// RocksDB-backed ordered store.
///
/// Uses the default bytewise comparator, so keys sort by unsigned
/// lexicographic order. Every call to [`OrderedStore::write`] becomes one
/// RocksDB `WriteBatch`.
pub struct RocksStore {
    db: DBWithThreadMode<MultiThreaded>,
    write_opts: WriteOptions,
    sync_write_opts: WriteOptions,
}

impl RocksStore {
    /// Opens or creates a RocksDB database at the given path.
    ///
    /// Uses `DurabilityMode::WalOnly` by default (fast, durable against process crash).
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::open_with_durability(path, DurabilityMode::default())
    }

    /// Opens or creates a RocksDB database with specified durability mode.
    pub fn open_with_durability(
        path: &Path,
        durability: DurabilityMode,
    ) -> Result<Self, StorageError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        opts.set_write_buffer_size(64 * 1024 * 1024); // 64MB
        opts.set_max_write_buffer_number(4);
        opts.set_target_file_size_base(64 * 1024 * 1024);
        opts.set_level_compaction_dynamic_level_bytes(true);

        // Live pointer reads are point lookups
        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        opts.set_block_based_table_factory(&block_opts);

        Self::open_with_options(path, opts, durability)
    }

    /// Opens a database with custom RocksDB options.
    pub fn open_with_options(
        path: &Path,
        opts: Options,
        durability: DurabilityMode,
    ) -> Result<Self, StorageError> {
        let db = DBWithThreadMode::open(&opts, path)?;

        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(durability == DurabilityMode::FsyncEveryWrite);

        let mut sync_write_opts = WriteOptions::default();
        sync_write_opts.set_sync(true);

        info!(path = %path.display(), ?durability, "Opened RocksDB store");

        Ok(Self {
            db,
            write_opts,
            sync_write_opts,
        })
    }

    /// Forces a flush of memtables to disk.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    /// Creates a throwaway database for testing.
    #[cfg(test)]
    pub fn open_temporary() -> Result<(Self, tempfile::TempDir), StorageError> {
        let temp_dir = tempfile::tempdir()?;
        let store = Self::open(temp_dir.path())?;
        Ok((store, temp_dir))
    }
}

impl OrderedStore for RocksStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(key)?)
    }

    fn write(&self, ops: Vec<WriteOp>, sync: bool) -> Result<(), StorageError> {
        let mut batch = WriteBatch::default();

        for op in ops {
            match op {
                WriteOp::Put { key, value } => batch.put(key, value),
                WriteOp::Delete { key } => batch.delete(key),
            }
        }

        let opts = if sync {
            &self.sync_write_opts
        } else {
            &self.write_opts
        };
        self.db.write_opt(batch, opts)?;
        Ok(())
    }

    fn scan<'a>(&'a self, start: &[u8], end: &[u8]) -> Result<KvIter<'a>, StorageError> {
        if start >= end {
            return Ok(Box::new(std::iter::empty()));
        }

        let mut read_opts = ReadOptions::default();
        read_opts.set_iterate_upper_bound(end.to_vec());

        let iter = self
            .db
            .iterator_opt(IteratorMode::From(start, Direction::Forward), read_opts)
            .map(|item| {
                item.map(|(k, v)| (k.into_vec(), v.into_vec()))
                    .map_err(StorageError::from)
            });

        Ok(Box::new(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (RocksStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = RocksStore::open(dir.path()).unwrap();
        (store, dir)
    }

    fn put(key: &str, value: &str) -> WriteOp {
        WriteOp::Put {
            key: key.as_bytes().to_vec(),
            value: value.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_put_get_delete() {
        let (store, _dir) = create_test_store();

        store.put(b"hello", b"world").unwrap();
        assert_eq!(store.get(b"hello").unwrap(), Some(b"world".to_vec()));

        store.delete(b"hello").unwrap();
        assert_eq!(store.get(b"hello").unwrap(), None);
    }

    #[test]
    fn test_get_missing() {
        let (store, _dir) = create_test_store();
        assert_eq!(store.get(b"nonexistent").unwrap(), None);
    }

    #[test]
    fn test_batch_write() {
        let (store, _dir) = create_test_store();

        store
            .write(
                vec![
                    put("key1", "value1"),
                    put("key2", "value2"),
                    WriteOp::Delete { key: b"key1".to_vec() },
                ],
                false,
            )
            .unwrap();

        assert_eq!(store.get(b"key1").unwrap(), None);
        assert_eq!(store.get(b"key2").unwrap(), Some(b"value2".to_vec()));
    }

    #[test]
    fn test_sync_write() {
        let (store, _dir) = create_test_store();
        store.write(vec![put("durable", "yes")], true).unwrap();
        assert_eq!(store.get(b"durable").unwrap(), Some(b"yes".to_vec()));
    }

    #[test]
    fn test_scan() {
        let (store, _dir) = create_test_store();

        store
            .write(
                vec![put("aaa", "1"), put("bbb", "2"), put("ccc", "3"), put("ddd", "4")],
                false,
            )
            .unwrap();

        // Scan [bbb, ddd) - should get bbb and ccc
        let results: Vec<_> = store
            .scan(b"bbb", b"ddd")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], (b"bbb".to_vec(), b"2".to_vec()));
        assert_eq!(results[1], (b"ccc".to_vec(), b"3".to_vec()));
    }

    #[test]
    fn test_scan_inverted_bounds() {
        let (store, _dir) = create_test_store();
        store.put(b"m", b"1").unwrap();
        assert_eq!(store.scan(b"z", b"a").unwrap().count(), 0);
    }

    #[test]
    fn test_reopen_preserves_data() {
        let dir = TempDir::new().unwrap();
        {
            let store = RocksStore::open(dir.path()).unwrap();
            store.put(b"persist", b"me").unwrap();
            store.flush().unwrap();
        }

        let store = RocksStore::open_with_durability(dir.path(), DurabilityMode::FsyncEveryWrite)
            .unwrap();
        assert_eq!(store.get(b"persist").unwrap(), Some(b"me".to_vec()));
    }

    #[test]
    fn test_open_temporary() {
        let (store, _dir) = RocksStore::open_temporary().unwrap();
        store.put(b"k", b"v").unwrap();
        assert_eq!(store.get(b"k").unwrap(), Some(b"v".to_vec()));
    }
}

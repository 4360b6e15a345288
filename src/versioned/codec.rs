// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Version key encoding and decoding.
//!
//! Two namespaces share the underlying keyspace, separated by a leading tag:
//!
//! - Live pointer: `[0x01][key bytes]`
//! - Version record: `[0x02][key_len:u32 BE][key bytes][MAX-ts:u64 BE][live:u8]`
//!
//! The timestamp is inverted (MAX - value) so that newer versions sort first
//! within the same logical key under bytewise ordering. The length prefix
//! keeps every version of one key contiguous. The trailing byte is `1` for a
//! value-bearing record and `0` for a tombstone.

use crate::storage::{Key, StorageError};
use crate::time::{TimeRank, Timestamp};

/// Namespace tag for live pointer entries.
pub const LIVE_TAG: u8 = 0x01;

/// Namespace tag for version record entries.
pub const VERSION_TAG: u8 = 0x02;

const TOMBSTONE_FLAG: u8 = 0x00;
const LIVE_FLAG: u8 = 0x01;

// Sorts after both flags; closes a range at a given rank.
const FLAG_UPPER: u8 = 0x02;

const HEADER_LEN: usize = 1 + 4;
const TRAILER_LEN: usize = 8 + 1;

/// A decoded version record key: `(logical key, time rank, is_live)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionKey {
    pub key: Key,
    pub rank: TimeRank,
    pub is_live: bool,
}

impl VersionKey {
    /// Creates a version key for a write stamped at `ts`.
    pub fn new(key: Key, ts: Timestamp, is_live: bool) -> Self {
        Self {
            key,
            rank: ts.rank(),
            is_live,
        }
    }

    /// Returns the write timestamp this key was minted with.
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.rank.timestamp()
    }

    /// Encodes this key into its stored byte form.
    pub fn encode(&self) -> Vec<u8> {
        encode_version_key(&self.key, self.timestamp(), self.is_live)
    }

    /// Decodes a stored version key.
    pub fn decode(encoded: &[u8]) -> Result<Self, StorageError> {
        decode_version_key(encoded)
    }
}

/// Encodes the live pointer key for a logical key.
#[inline]
pub fn encode_live_key(key: &Key) -> Vec<u8> {
    let key_bytes = key.as_bytes();
    let mut encoded = Vec::with_capacity(1 + key_bytes.len());
    encoded.push(LIVE_TAG);
    encoded.extend_from_slice(key_bytes);
    encoded
}

/// Returns the prefix shared by every version record of a logical key.
#[inline]
pub fn version_prefix(key: &Key) -> Vec<u8> {
    let key_bytes = key.as_bytes();
    let mut prefix = Vec::with_capacity(HEADER_LEN + key_bytes.len() + TRAILER_LEN);
    prefix.push(VERSION_TAG);
    prefix.extend_from_slice(&(key_bytes.len() as u32).to_be_bytes());
    prefix.extend_from_slice(key_bytes);
    prefix
}

/// Encodes a version record key.
///
/// Using big-endian ensures proper lexicographic ordering.
#[inline]
pub fn encode_version_key(key: &Key, ts: Timestamp, is_live: bool) -> Vec<u8> {
    let mut encoded = version_prefix(key);
    encoded.extend_from_slice(&ts.rank().to_be_bytes());
    encoded.push(if is_live { LIVE_FLAG } else { TOMBSTONE_FLAG });
    encoded
}

/// Decodes a version record key back into its components.
pub fn decode_version_key(encoded: &[u8]) -> Result<VersionKey, StorageError> {
    if encoded.len() < HEADER_LEN {
        return Err(StorageError::InvalidKeyEncoding(
            "key too short for header".to_string(),
        ));
    }

    if encoded[0] != VERSION_TAG {
        return Err(StorageError::InvalidKeyEncoding(format!(
            "expected version tag {:#04x}, got {:#04x}",
            VERSION_TAG, encoded[0]
        )));
    }

    let key_len = u32::from_be_bytes([encoded[1], encoded[2], encoded[3], encoded[4]]) as usize;

    let expected_len = HEADER_LEN + key_len + TRAILER_LEN;
    if encoded.len() != expected_len {
        return Err(StorageError::InvalidKeyEncoding(format!(
            "expected {} bytes, got {}",
            expected_len,
            encoded.len()
        )));
    }

    let key = Key::new(encoded[HEADER_LEN..HEADER_LEN + key_len].to_vec());

    let rank_offset = HEADER_LEN + key_len;
    let mut rank_bytes = [0u8; 8];
    rank_bytes.copy_from_slice(&encoded[rank_offset..rank_offset + 8]);
    let rank = TimeRank::from_raw(u64::from_be_bytes(rank_bytes));

    let is_live = match encoded[rank_offset + 8] {
        LIVE_FLAG => true,
        TOMBSTONE_FLAG => false,
        other => {
            return Err(StorageError::InvalidKeyEncoding(format!(
                "invalid live flag {:#04x}",
                other
            )))
        }
    };

    Ok(VersionKey { key, rank, is_live })
}

/// Returns the half-open byte range `[start, end)` holding exactly the
/// versions of `key` written at times `from..=to`.
///
/// When `from > to` the returned `start` is not below `end` and the range
/// is empty.
pub fn range_bounds(key: &Key, from: Timestamp, to: Timestamp) -> (Vec<u8>, Vec<u8>) {
    let prefix = version_prefix(key);

    let mut start = prefix.clone();
    start.extend_from_slice(&to.rank().to_be_bytes());
    start.push(TOMBSTONE_FLAG);

    let mut end = prefix;
    end.extend_from_slice(&from.rank().to_be_bytes());
    end.push(FLAG_UPPER);

    (start, end)
}

/// Returns the byte range holding every version of `key`.
#[inline]
pub fn history_bounds(key: &Key) -> (Vec<u8>, Vec<u8>) {
    range_bounds(key, Timestamp::MIN, Timestamp::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(nanos: u64) -> Timestamp {
        Timestamp::from_nanos(nanos)
    }

    fn in_range(encoded: &[u8], bounds: &(Vec<u8>, Vec<u8>)) -> bool {
        encoded >= bounds.0.as_slice() && encoded < bounds.1.as_slice()
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let key = Key::from("eugene");
        let encoded = encode_version_key(&key, ts(1_000), true);
        let decoded = decode_version_key(&encoded).unwrap();

        assert_eq!(decoded.key, key);
        assert_eq!(decoded.timestamp(), ts(1_000));
        assert!(decoded.is_live);
    }

    #[test]
    fn test_tombstone_roundtrip() {
        let key = Key::from("eugene");
        let version = VersionKey::new(key, ts(55), false);
        assert_eq!(VersionKey::decode(&version.encode()).unwrap(), version);
    }

    #[test]
    fn test_encode_decode_empty_key() {
        let key = Key::from(Vec::<u8>::new());
        let encoded = encode_version_key(&key, Timestamp::MIN, true);
        let decoded = decode_version_key(&encoded).unwrap();

        assert_eq!(decoded.key, key);
        assert_eq!(decoded.timestamp(), Timestamp::MIN);
    }

    #[test]
    fn test_encode_decode_max_timestamp() {
        let key = Key::from("test");
        let encoded = encode_version_key(&key, Timestamp::MAX, false);
        let decoded = decode_version_key(&encoded).unwrap();

        assert_eq!(decoded.timestamp(), Timestamp::MAX);
        assert!(!decoded.is_live);
    }

    #[test]
    fn test_newer_versions_sort_first() {
        let key = Key::from("key");

        let encoded_old = encode_version_key(&key, ts(100), true);
        let encoded_new = encode_version_key(&key, ts(200), true);

        // Newer version should sort BEFORE older version (smaller in byte order)
        assert!(encoded_new < encoded_old, "newer version should sort first");
    }

    #[test]
    fn test_newer_tombstone_sorts_before_older_value() {
        let key = Key::from("key");
        let value = encode_version_key(&key, ts(100), true);
        let tombstone = encode_version_key(&key, ts(101), false);
        assert!(tombstone < value);
    }

    #[test]
    fn test_versions_of_key_are_contiguous() {
        // "a" is a byte-prefix of "ab"; lengths keep their versions apart
        let a_old = encode_version_key(&Key::from("a"), ts(1), true);
        let a_new = encode_version_key(&Key::from("a"), ts(9), true);
        let ab = encode_version_key(&Key::from("ab"), ts(5), true);

        let bounds = history_bounds(&Key::from("a"));
        assert!(in_range(&a_old, &bounds));
        assert!(in_range(&a_new, &bounds));
        assert!(!in_range(&ab, &bounds));
    }

    #[test]
    fn test_live_key_disjoint_from_versions() {
        let key = Key::from("k");
        let live = encode_live_key(&key);
        assert_eq!(live[0], LIVE_TAG);
        assert!(!in_range(&live, &history_bounds(&key)));
        assert!(decode_version_key(&live).is_err());
    }

    #[test]
    fn test_range_bounds_inclusive_window() {
        let key = Key::from("k");
        let bounds = range_bounds(&key, ts(200), ts(300));

        for (nanos, expected) in [(199, false), (200, true), (250, true), (300, true), (301, false)] {
            for is_live in [true, false] {
                let encoded = encode_version_key(&key, ts(nanos), is_live);
                assert_eq!(
                    in_range(&encoded, &bounds),
                    expected,
                    "t={} live={}",
                    nanos,
                    is_live
                );
            }
        }
    }

    #[test]
    fn test_range_bounds_inverted_window_empty() {
        let (start, end) = range_bounds(&Key::from("k"), ts(300), ts(200));
        assert!(start >= end);
    }

    #[test]
    fn test_decode_too_short() {
        assert!(decode_version_key(&[VERSION_TAG, 0, 0]).is_err());
    }

    #[test]
    fn test_decode_wrong_length() {
        // Says 5 key bytes but only 3 follow
        let result = decode_version_key(&[VERSION_TAG, 0, 0, 0, 5, 1, 2, 3]);
        assert!(matches!(result, Err(StorageError::InvalidKeyEncoding(_))));
    }

    #[test]
    fn test_decode_wrong_tag() {
        let mut encoded = encode_version_key(&Key::from("k"), ts(1), true);
        encoded[0] = 0x7f;
        assert!(decode_version_key(&encoded).is_err());
    }

    #[test]
    fn test_decode_invalid_flag() {
        let mut encoded = encode_version_key(&Key::from("k"), ts(1), true);
        let last = encoded.len() - 1;
        encoded[last] = 0x09;
        assert!(decode_version_key(&encoded).is_err());
    }
}

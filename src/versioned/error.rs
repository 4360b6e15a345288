// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Versioned store error types.

use crate::storage::{Key, StorageError};

/// Errors returned by [`VersionedStore`](super::VersionedStore) operations.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// No live value: never written, deleted, or nothing in the queried window.
    #[error("key not found in database [{key}]")]
    NotFound { key: Key },

    /// The underlying store failed. Never retried by this layer.
    #[error("storage error: {0}")]
    Store(#[from] StorageError),
}

impl VersionError {
    /// Returns true if this error is [`VersionError::NotFound`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, VersionError::NotFound { .. })
    }
}

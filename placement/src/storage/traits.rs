// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Storage area trait
//!
//! A storage area is a flat string key/value space, the same shape as a
//! browser's session or local storage. Every backend implements this trait
//! so the credential store never knows which one it is writing to.

use super::types::{StorageResult, StorageType};
use std::sync::Arc;

/// Key/value area holding string entries
pub trait StorageArea: Send + Sync {
    /// Get a value by key
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Insert or overwrite a value
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// List keys starting with `prefix`
    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Write several entries. Backends that can apply them atomically should.
    fn set_items(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    /// Remove several keys
    fn remove_items(&self, keys: &[&str]) -> StorageResult<()> {
        for key in keys {
            self.remove_item(key)?;
        }
        Ok(())
    }

    /// Flush any pending writes to disk
    fn flush(&self) -> StorageResult<()> {
        Ok(())
    }

    /// Backend kind
    fn storage_type(&self) -> StorageType;
}

// Lets a shared area be handed to anything that wants `impl StorageArea`.
impl StorageArea for Arc<dyn StorageArea> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }

    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        (**self).keys_with_prefix(prefix)
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        (**self).set_items(entries)
    }

    fn remove_items(&self, keys: &[&str]) -> StorageResult<()> {
        (**self).remove_items(keys)
    }

    fn flush(&self) -> StorageResult<()> {
        (**self).flush()
    }

    fn storage_type(&self) -> StorageType {
        (**self).storage_type()
    }
}

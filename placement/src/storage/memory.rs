// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory storage area, scoped to the running process

use super::traits::StorageArea;
use super::types::{StorageResult, StorageType};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// In-memory storage area
///
/// Entries disappear when the area is dropped, which is what a
/// session-scoped credential should do.
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty memory area
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the area holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        Ok(self
            .data
            .read()
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        // One write lock so readers never see half of a batch
        let mut data = self.data.write();
        for (key, value) in entries {
            data.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_items(&self, keys: &[&str]) -> StorageResult<()> {
        let mut data = self.data.write();
        for key in keys {
            data.remove(*key);
        }
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let area = MemoryStorage::new();
        area.set_item("student:token", "t1").unwrap();
        assert_eq!(area.get_item("student:token").unwrap().as_deref(), Some("t1"));

        area.remove_item("student:token").unwrap();
        assert!(area.get_item("student:token").unwrap().is_none());
        // Removing again is fine
        area.remove_item("student:token").unwrap();
        assert!(area.is_empty());
    }

    #[test]
    fn test_keys_with_prefix() {
        let area = MemoryStorage::new();
        area.set_items(&[
            ("employer:token", "a"),
            ("employer:user", "{}"),
            ("student:token", "b"),
        ])
        .unwrap();

        let keys = area.keys_with_prefix("employer:").unwrap();
        assert_eq!(keys, vec!["employer:token", "employer:user"]);
        assert_eq!(area.len(), 3);
    }
}

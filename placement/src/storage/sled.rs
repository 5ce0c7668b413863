// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Sled storage area implementation

use super::traits::StorageArea;
use super::types::{StorageError, StorageResult, StorageType};
use std::path::Path;

const CREDENTIALS_TREE: &str = "credentials";

/// Persistent storage area backed by a sled tree
pub struct SledStorage {
    db: sled::Db,
    tree: sled::Tree,
}

fn backend(e: sled::Error) -> StorageError {
    StorageError::BackendSpecific(e.to_string())
}

fn decode(bytes: &[u8]) -> StorageResult<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| StorageError::SerializationError(e.to_string()))
}

impl SledStorage {
    /// Open or create a sled area in `path`
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let db = sled::open(path.as_ref()).map_err(|e| match e {
            sled::Error::Io(io) => StorageError::Unavailable(format!(
                "cannot open {}: {}",
                path.as_ref().display(),
                io
            )),
            other => backend(other),
        })?;
        let tree = db.open_tree(CREDENTIALS_TREE).map_err(backend)?;
        Ok(Self { db, tree })
    }
}

impl StorageArea for SledStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.tree
            .get(key.as_bytes())
            .map_err(backend)?
            .map(|v| decode(&v))
            .transpose()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.tree
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(backend)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.tree.remove(key.as_bytes()).map_err(backend)?;
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        self.tree
            .scan_prefix(prefix.as_bytes())
            .keys()
            .map(|k| k.map_err(backend).and_then(|k| decode(&k)))
            .collect()
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        let mut batch = sled::Batch::default();
        for (key, value) in entries {
            batch.insert(key.as_bytes(), value.as_bytes());
        }
        self.tree.apply_batch(batch).map_err(backend)
    }

    fn remove_items(&self, keys: &[&str]) -> StorageResult<()> {
        let mut batch = sled::Batch::default();
        for key in keys {
            batch.remove(key.as_bytes());
        }
        self.tree.apply_batch(batch).map_err(backend)
    }

    fn flush(&self) -> StorageResult<()> {
        self.db.flush().map_err(backend)?;
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Sled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entries_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let area = SledStorage::open(temp_dir.path()).unwrap();
            area.set_items(&[("student:token", "t1"), ("student:role", "student")])
                .unwrap();
            area.flush().unwrap();
        }

        let area = SledStorage::open(temp_dir.path()).unwrap();
        assert_eq!(area.get_item("student:token").unwrap().as_deref(), Some("t1"));
        assert_eq!(
            area.keys_with_prefix("student:").unwrap(),
            vec!["student:role", "student:token"]
        );
    }

    #[test]
    fn test_remove_items_batch() {
        let temp_dir = TempDir::new().unwrap();
        let area = SledStorage::open(temp_dir.path()).unwrap();
        area.set_items(&[("a:1", "x"), ("a:2", "y")]).unwrap();
        area.remove_items(&["a:1", "a:2", "a:3"]).unwrap();
        assert!(area.keys_with_prefix("a:").unwrap().is_empty());
    }
}

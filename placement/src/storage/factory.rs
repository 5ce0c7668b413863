// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Storage area factory

use super::memory::MemoryStorage;
use super::traits::StorageArea;
use super::types::{StorageError, StorageResult, StorageType};
use std::path::Path;
use std::sync::Arc;

/// Create a storage area of the given type
///
/// # Arguments
/// * `storage_type` - Which backend to create
/// * `path` - Directory for persistent backends; ignored by memory areas
///
/// # Examples
/// ```ignore
/// let area = open_storage_area(StorageType::Sled, Some(Path::new("./credentials")))?;
/// area.set_item("student:token", "abc")?;
/// ```
pub fn open_storage_area(
    storage_type: StorageType,
    path: Option<&Path>,
) -> StorageResult<Arc<dyn StorageArea>> {
    match storage_type {
        StorageType::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageType::Sled => {
            let path = path.ok_or_else(|| {
                StorageError::Unavailable("persistent storage needs a directory".to_string())
            })?;
            open_sled(path)
        }
    }
}

#[cfg(feature = "sled-backend")]
fn open_sled(path: &Path) -> StorageResult<Arc<dyn StorageArea>> {
    use super::sled::SledStorage;
    Ok(Arc::new(SledStorage::open(path)?))
}

#[cfg(not(feature = "sled-backend"))]
fn open_sled(_path: &Path) -> StorageResult<Arc<dyn StorageArea>> {
    Err(StorageError::Unavailable(
        "built without the sled-backend feature".to_string(),
    ))
}

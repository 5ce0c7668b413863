// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::storage::StorageType;
use serde::{Deserialize, Serialize};

/// Where a role's credentials are kept
///
/// # Scopes
///
/// - **Session**: the credentials live in process memory and are gone when the
///   application exits, the same lifetime as browser session storage.
///
/// - **Persistent**: the credentials are written to disk and picked up again on
///   the next start, the same lifetime as browser local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageScope {
    /// Process-lifetime storage (default)
    #[default]
    Session,

    /// On-disk storage that survives restarts
    Persistent,
}

impl StorageScope {
    /// Returns true if this is Session scope
    pub fn is_session(&self) -> bool {
        matches!(self, StorageScope::Session)
    }

    /// Returns true if this is Persistent scope
    pub fn is_persistent(&self) -> bool {
        matches!(self, StorageScope::Persistent)
    }

    /// Storage backend that provides this scope
    pub fn storage_type(&self) -> StorageType {
        match self {
            StorageScope::Session => StorageType::Memory,
            StorageScope::Persistent => StorageType::Sled,
        }
    }
}

impl std::str::FromStr for StorageScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "session" => Ok(StorageScope::Session),
            "persistent" | "local" => Ok(StorageScope::Persistent),
            _ => Err(format!(
                "Unknown storage scope: {}. Valid options: session, persistent",
                s
            )),
        }
    }
}

impl std::fmt::Display for StorageScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageScope::Session => write!(f, "session"),
            StorageScope::Persistent => write!(f, "persistent"),
        }
    }
}

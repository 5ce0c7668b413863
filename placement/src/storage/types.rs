// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Storage area types and error handling

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Storage area backend
///
/// Specifies which underlying technology holds the entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StorageType {
    /// Sled - Pure Rust embedded database
    /// Best for: credentials that should outlive the process
    Sled,

    /// Memory - entries live as long as the process
    /// Best for: session-scoped credentials, unit testing
    #[default]
    Memory,
}

impl std::str::FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sled" => Ok(StorageType::Sled),
            "memory" => Ok(StorageType::Memory),
            _ => Err(format!(
                "Unknown storage type: {}. Valid options: sled, memory",
                s
            )),
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StorageType::Sled => "sled",
            StorageType::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// Error type for storage area operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O related errors (file system)
    IoError(std::io::Error),

    /// Entry could not be encoded or decoded
    SerializationError(String),

    /// The area cannot be used at all (disabled, missing directory, locked)
    Unavailable(String),

    /// Backend-specific error (Sled)
    BackendSpecific(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "I/O error: {}", e),
            StorageError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            StorageError::Unavailable(e) => write!(f, "Storage unavailable: {}", e),
            StorageError::BackendSpecific(e) => write!(f, "Storage backend error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::IoError(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::SerializationError(e.to_string())
    }
}

/// Result type for storage area operations
pub type StorageResult<T> = Result<T, StorageError>;

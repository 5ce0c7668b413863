// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Storage areas for credentials
//!
//! Two kinds of area exist, mirroring a browser:
//!
//! - `MemoryStorage`: lives as long as the process (session storage)
//! - `SledStorage`: survives restarts on disk (local storage)
//!
//! ```text
//! CredentialStore (role-namespaced sessions)
//!     ↓
//! StorageArea (string key/value abstraction)
//!     ↓
//! MemoryStorage | SledStorage
//! ```

pub mod factory;
pub mod memory;
#[cfg(feature = "sled-backend")]
pub mod sled;
pub mod traits;
pub mod types;

pub use factory::open_storage_area;
pub use memory::MemoryStorage;
#[cfg(feature = "sled-backend")]
pub use self::sled::SledStorage;
pub use traits::StorageArea;
pub use types::{StorageError, StorageResult, StorageType};

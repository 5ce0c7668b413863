// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Role-based session management
//!
//! This module provides:
//! - The closed set of portal roles and their routing/storage table
//! - Session and user record models
//! - The `SessionProvider` interface handed to guards and clients
//! - `CredentialStore`, the storage-backed provider
//!
//! # Storage scopes
//!
//! - `StorageScope::Session`: credentials live in process memory
//! - `StorageScope::Persistent`: credentials live in a sled directory

pub mod models;
pub mod provider;
pub mod role;
pub mod scope;
pub mod store;

pub use models::{BearerToken, Session, UserRecord};
pub use provider::SessionProvider;
pub use role::{Role, RoleProfile};
pub use scope::StorageScope;
pub use store::CredentialStore;

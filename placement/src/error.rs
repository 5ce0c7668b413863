// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Top-level error type

use crate::auth::LoginError;
use crate::client::{ApiError, TransportError};
use crate::config::ConfigError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by [`crate::PortalContext`]
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl PortalError {
    /// True when the backend (or a missing session) rejected the caller's identity
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PortalError::Api(e) if e.is_unauthorized())
    }
}

// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the dashboard SDK

use placement::{ApiError, LoginError, PortalError, Role};
use thiserror::Error;

/// SDK result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by dashboard operations
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Portal(#[from] PortalError),

    #[error("Not signed in as {role}")]
    NotAuthorized { role: Role },

    #[error("Left {route} before the response arrived")]
    Stale { route: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True when the caller has to sign in again
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::Api(e) => e.is_unauthorized(),
            Error::Portal(e) => e.is_unauthorized(),
            Error::NotAuthorized { .. } => true,
            _ => false,
        }
    }
}

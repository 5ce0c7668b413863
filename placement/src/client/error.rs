// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Client error types

use super::request::StatusCode;
use crate::session::Role;
use thiserror::Error;

/// Failure to exchange a request with the backend at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),
}

impl From<url::ParseError> for TransportError {
    fn from(error: url::ParseError) -> Self {
        TransportError::InvalidUrl(error.to_string())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_builder() {
            TransportError::InvalidRequest(error.to_string())
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

/// Errors surfaced to page code by the authenticated client
///
/// Authorization failures collapse into `Unauthorized`; by the time a caller
/// sees it the session is cleared and the redirect has been issued. Every
/// other failure is passed through as received.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Not signed in as {role}; redirected to {login_route}")]
    Unauthorized {
        role: Role,
        login_route: &'static str,
    },

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn unauthorized(role: Role) -> Self {
        ApiError::Unauthorized {
            role,
            login_route: role.login_route(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// HTTP status for pass-through status errors
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}

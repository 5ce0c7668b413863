// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Login and logout flows

use crate::client::{ApiRequest, Transport, TransportError};
use crate::navigation::{NavigationMode, Navigator};
use crate::session::{Role, Session, SessionProvider, UserRecord};
use crate::storage::StorageError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Credentials posted to a role's login endpoint
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Login errors. None of them leave anything in the credential store.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Login as {role} rejected ({status}): {message}")]
    Rejected {
        role: Role,
        status: u16,
        message: String,
    },

    #[error("Malformed login response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Could not store session: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Deserialize)]
struct LoginPayload {
    #[serde(default)]
    token: String,
    #[serde(alias = "userRecord", default)]
    user: serde_json::Value,
}

/// Exchanges credentials for a session and tears sessions down again
#[derive(Clone)]
pub struct LoginService {
    transport: Arc<dyn Transport>,
    sessions: Arc<dyn SessionProvider>,
    navigator: Arc<dyn Navigator>,
}

impl LoginService {
    pub fn new(
        transport: Arc<dyn Transport>,
        sessions: Arc<dyn SessionProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            sessions,
            navigator,
        }
    }

    /// Log in as `role`
    ///
    /// On success the session replaces any earlier one for the role and the
    /// navigator moves to the role's dashboard.
    pub async fn login(&self, role: Role, credentials: &Credentials) -> Result<Session, LoginError> {
        let request = ApiRequest::post(role.login_endpoint())
            .with_json(credentials)
            .map_err(|e| LoginError::MalformedResponse(e.to_string()))?;
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message = response.error_message().unwrap_or_else(|| {
                response
                    .status
                    .canonical_reason()
                    .unwrap_or("login failed")
                    .to_string()
            });
            log::info!("Login as {} rejected with {}", role, response.status);
            return Err(LoginError::Rejected {
                role,
                status: response.status.as_u16(),
                message,
            });
        }

        let payload: LoginPayload = response
            .json()
            .map_err(|e| LoginError::MalformedResponse(e.to_string()))?;
        if payload.token.trim().is_empty() {
            return Err(LoginError::MalformedResponse(
                "response has no token".to_string(),
            ));
        }
        if !payload.user.is_object() {
            return Err(LoginError::MalformedResponse(
                "response has no user object".to_string(),
            ));
        }

        let user_record = UserRecord::new(payload.user);
        self.sessions.save(role, &payload.token, &user_record)?;
        self.navigator
            .navigate(role.dashboard_route(), NavigationMode::Push);
        log::info!("Logged in as {}", role);

        Ok(Session::new(role, payload.token, user_record))
    }

    /// Client-side logout: forget the session and show the login page
    pub fn logout(&self, role: Role) {
        self.sessions.clear(role);
        self.navigator
            .navigate(role.login_route(), NavigationMode::Replace);
        log::info!("Logged out of {}", role);
    }
}

// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Authenticated request wrapper
//!
//! Every role-scoped backend call goes through [`AuthenticatedClient::send`]:
//!
//! 1. Load the role's session. None → run the unauthorized handler and fail
//!    without touching the network.
//! 2. Attach `Authorization: Bearer <token>` and a request id.
//! 3. 401/403 → run the unauthorized handler for the token that was sent,
//!    return `ApiError::Unauthorized`. A session saved by a later login
//!    survives a rejection of the older token.
//! 4. Any other non-2xx or transport failure → returned unchanged.
//!
//! Nothing is retried.

use super::error::ApiError;
use super::request::{ApiRequest, ApiResponse, FilePart};
use super::transport::Transport;
use crate::guard::UnauthorizedHandler;
use crate::session::{Role, SessionProvider};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attaches the active role's bearer token to backend calls
#[derive(Clone)]
pub struct AuthenticatedClient {
    transport: Arc<dyn Transport>,
    sessions: Arc<dyn SessionProvider>,
    on_unauthorized: UnauthorizedHandler,
}

impl AuthenticatedClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        sessions: Arc<dyn SessionProvider>,
        on_unauthorized: UnauthorizedHandler,
    ) -> Self {
        Self {
            transport,
            sessions,
            on_unauthorized,
        }
    }

    /// Send `request` as `role`
    pub async fn send(&self, role: Role, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        // Only the role's own token may be attached
        request
            .headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));

        let session = match self.sessions.load(role) {
            Some(session) => session,
            None => {
                log::debug!(
                    "No {} session for {} {}; not sending",
                    role,
                    request.method,
                    request.path
                );
                self.on_unauthorized.handle(role);
                return Err(ApiError::unauthorized(role));
            }
        };

        let request_id = Uuid::new_v4().to_string();
        let method = request.method.clone();
        let path = request.path.clone();
        let token = session.token;
        let request = request
            .header("authorization", token.header_value())
            .header(REQUEST_ID_HEADER, request_id.as_str());

        let started = Instant::now();
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{} {} [{}] as {} failed: {}", method, path, request_id, role, e);
                return Err(ApiError::Transport(e));
            }
        };
        log::debug!(
            "{} {} [{}] as {} -> {} in {} ms",
            method,
            path,
            request_id,
            role,
            response.status,
            started.elapsed().as_millis()
        );

        if response.is_auth_failure() {
            log::warn!(
                "{} {} [{}] rejected {} credentials with {}",
                method,
                path,
                request_id,
                role,
                response.status
            );
            self.on_unauthorized.handle_for(role, &token);
            return Err(ApiError::unauthorized(role));
        }
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.text(),
            });
        }
        Ok(response)
    }

    /// Send and decode a JSON response
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        role: Role,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let response = self.send(role, request).await?;
        Ok(response.json()?)
    }

    /// GET `path` and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, role: Role, path: &str) -> Result<T, ApiError> {
        self.send_json(role, ApiRequest::get(path)).await
    }

    /// POST a file as multipart form data
    pub async fn upload(
        &self,
        role: Role,
        path: &str,
        file: FilePart,
    ) -> Result<ApiResponse, ApiError> {
        self.send(role, ApiRequest::post(path).multipart(file)).await
    }
}
